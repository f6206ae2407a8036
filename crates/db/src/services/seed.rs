use sqlx::SqlitePool;

/// Demo data loader. Populates the database with a representative
/// construction-company data set the first time the server starts.
pub struct SeedService;

const PROJECTS: &[(&str, &str, &str, &str, f64, &str, &str, &str)] = &[
    (
        "Riverside Towers",
        "Downtown",
        "2023-01-15",
        "2024-06-30",
        5_200_000.0,
        "In Progress",
        "Riverside Development Corp",
        "Luxury condominium complex with 25 floors",
    ),
    (
        "Metro Transit Hub",
        "North District",
        "2023-03-10",
        "2024-11-15",
        8_500_000.0,
        "Planning",
        "City Transport Authority",
        "Multi-modal transit center connecting bus, rail, and subway",
    ),
    (
        "Greenview Office Park",
        "West Side",
        "2022-09-05",
        "2023-12-31",
        3_800_000.0,
        "Completed",
        "Greenview Enterprises",
        "Eco-friendly office park with four buildings and green spaces",
    ),
    (
        "Harbor Bridge Renovation",
        "Waterfront",
        "2023-05-20",
        "2024-08-10",
        12_500_000.0,
        "In Progress",
        "State Highway Department",
        "Structural renovation and expansion of the main harbor bridge",
    ),
    (
        "Community Health Center",
        "East District",
        "2023-07-01",
        "2024-04-30",
        4_200_000.0,
        "In Progress",
        "Regional Health Authority",
        "Modern healthcare facility with emergency services and specialty clinics",
    ),
];

const TASKS: &[(i64, &str, &str, &str, &str, &str, &str)] = &[
    (1, "Foundation Work", "Excavation and foundation pouring", "2023-01-20", "2023-03-15", "Completed", "High"),
    (1, "Structural Framing", "Steel frame installation", "2023-03-20", "2023-06-30", "Completed", "High"),
    (1, "Exterior Cladding", "Installation of facade materials", "2023-07-05", "2023-11-15", "In Progress", "Medium"),
    (1, "Interior Finishing", "Drywall, painting, and fixtures", "2023-10-01", "2024-03-30", "Not Started", "Medium"),
    (1, "Mechanical Systems", "HVAC, plumbing, and electrical", "2023-08-15", "2024-02-28", "In Progress", "High"),
    (2, "Site Preparation", "Clearing and grading", "2023-03-15", "2023-05-30", "Not Started", "High"),
    (3, "Final Inspections", "Building code compliance checks", "2023-11-15", "2023-12-15", "Completed", "High"),
    (4, "Traffic Management", "Implementing detours and signage", "2023-05-25", "2023-07-15", "Completed", "High"),
    (4, "Structural Assessment", "Evaluating current bridge conditions", "2023-06-01", "2023-07-30", "Completed", "High"),
    (5, "Site Preparation", "Clearing and foundation work", "2023-07-10", "2023-09-20", "Completed", "High"),
];

const WORKERS: &[(&str, &str, &str, &str, &str, f64)] = &[
    ("John Smith", "Project Manager", "john.smith@example.com", "PMP Certified", "Full-time", 45.0),
    ("Sarah Johnson", "Civil Engineer", "sarah.j@example.com", "PE License", "Full-time", 38.5),
    ("Michael Brown", "Electrician", "mbrown@example.com", "Master Electrician", "Full-time", 32.75),
    ("Lisa Chen", "Safety Officer", "l.chen@example.com", "OSHA Certified", "Full-time", 36.25),
    ("Robert Davis", "Equipment Operator", "rdavis@example.com", "Heavy Equipment License", "Full-time", 29.5),
    ("James Wilson", "Carpenter", "jwilson@example.com", "Journeyman Carpenter", "Full-time", 31.0),
    ("Emily Rodriguez", "Site Supervisor", "e.rodriguez@example.com", "Construction Supervision", "Full-time", 40.0),
    ("David Thompson", "Plumber", "dthompson@example.com", "Master Plumber", "Contract", 33.5),
    ("Maria Garcia", "Architect", "m.garcia@example.com", "Licensed Architect", "Part-time", 42.75),
    ("Thomas Wright", "Laborer", "twright@example.com", "OSHA 10", "Full-time", 25.5),
];

const MATERIALS: &[(&str, &str, i64, &str, f64, &str)] = &[
    ("Concrete Mix", "Building Materials", 1500, "Bags", 12.5, "ABC Suppliers"),
    ("Steel Rebar", "Metals", 8000, "Feet", 2.75, "Steel Solutions Inc."),
    ("Lumber 2x4", "Wood", 5000, "Pieces", 3.85, "Timber Products"),
    ("Drywall Sheets", "Building Materials", 1200, "Sheets", 15.25, "Construction Supply Co."),
    ("Copper Wiring", "Electrical", 10000, "Feet", 1.2, "Electric Warehouse"),
    ("PVC Pipes", "Plumbing", 3000, "Feet", 2.3, "Plumbing Plus"),
    ("Paint - Interior", "Finishing", 500, "Gallons", 24.99, "Color World"),
    ("Roof Shingles", "Roofing", 450, "Bundles", 32.5, "Roofing Supplies Inc."),
    ("Insulation", "Building Materials", 800, "Rolls", 18.75, "Insulate Pro"),
    ("Window Units", "Fixtures", 175, "Units", 210.0, "Glass Masters"),
];

const SAFETY_INCIDENTS: &[(i64, &str, &str, &str, &str, bool, &str)] = &[
    (1, "2023-04-12", "Minor Injury", "Worker sustained minor cut on hand", "Low", true, "First aid administered, worker resumed duties"),
    (3, "2023-10-05", "Equipment Malfunction", "Crane hydraulic system failure", "Medium", true, "Equipment repaired and recertified"),
    (4, "2023-06-23", "Near Miss", "Falling material narrowly missed worker", "Medium", true, "Additional safety netting installed"),
    (1, "2023-09-02", "Property Damage", "Vehicle damaged perimeter fencing", "Low", true, "Fence repaired, driver retrained"),
    (5, "2023-08-15", "Environmental", "Chemical spill on site", "High", true, "Hazmat team cleaned site, procedures reviewed"),
];

const EQUIPMENT: &[(&str, &str, &str, &str, &str, &str)] = &[
    ("Excavator - CAT 320", "Heavy Equipment", "Operational", "2023-05-10", "2023-11-10", "Hydraulic system serviced"),
    ("Tower Crane TC-205", "Lifting Equipment", "Operational", "2023-07-15", "2024-01-15", "Load testing completed"),
    ("Concrete Mixer CM-10", "Mixing Equipment", "Under Repair", "2023-04-20", "2023-10-20", "Motor being replaced"),
    ("Bulldozer D8T", "Heavy Equipment", "Operational", "2023-08-05", "2024-02-05", "Tracks replaced"),
    ("Generator G-5000", "Power Equipment", "Operational", "2023-09-12", "2024-03-12", "Fuel system cleaned"),
    ("Backhoe Loader 416F", "Heavy Equipment", "Operational", "2023-06-25", "2023-12-25", "Regular maintenance"),
    ("Air Compressor AC-50", "Air Tools", "Under Repair", "2023-03-30", "2023-09-30", "Pressure valve replacement"),
    ("Forklift FL-3000", "Material Handling", "Operational", "2023-08-18", "2024-02-18", "Hydraulic system checked"),
    ("Boom Lift BL-60", "Access Equipment", "Operational", "2023-07-02", "2024-01-02", "Annual certification completed"),
    ("Concrete Pump CP-40", "Concrete Equipment", "Operational", "2023-09-05", "2024-03-05", "Hoses replaced"),
];

const SAFETY_CHECKLISTS: &[(i64, &str, &str, bool, bool, bool, bool, bool, &str)] = &[
    (1, "2023-06-15", "Lisa Chen", true, true, true, true, true, "All safety measures in compliance"),
    (1, "2023-07-15", "Lisa Chen", true, true, true, true, true, "Fire extinguishers recertified"),
    (2, "2023-05-20", "David Thompson", true, false, true, true, true, "Hazard signage needs improvement"),
    (3, "2023-11-10", "Emily Rodriguez", true, true, true, true, true, "Monthly inspection completed"),
    (4, "2023-08-05", "Lisa Chen", true, true, false, true, true, "Equipment safety issues addressed"),
    (4, "2023-09-05", "Lisa Chen", true, true, true, true, true, "Follow-up inspection completed"),
    (5, "2023-08-25", "Michael Brown", true, true, true, false, true, "Fire safety equipment being updated"),
];

const DAILY_TASKS: &[(i64, i64, &str, &str, f64, bool, &str)] = &[
    (1, 2, "2023-06-20", "Structural steel installation - North wing", 8.5, true, "Completed ahead of schedule"),
    (1, 3, "2023-06-20", "Electrical conduit installation - Floors 1-3", 9.0, true, "Additional materials needed for tomorrow"),
    (1, 6, "2023-06-20", "Interior framing - Floors 7-8", 8.0, true, "No issues reported"),
    (3, 8, "2023-10-15", "Final plumbing inspections - Building A", 6.5, true, "All inspections passed"),
    (4, 5, "2023-07-10", "Site preparation and equipment staging", 10.0, true, "Overtime required to complete"),
    (5, 7, "2023-08-20", "Foundation work supervision", 8.0, true, "Concrete pouring scheduled for tomorrow"),
    (1, 10, "2023-06-21", "Material handling and site cleanup", 7.5, true, "Site ready for inspections"),
    (4, 4, "2023-07-11", "Safety monitoring during lane closures", 9.0, true, "No incidents reported"),
    (5, 2, "2023-08-21", "Structural calculations and site verification", 8.0, true, "Minor adjustments to foundation plans"),
    (1, 9, "2023-06-22", "Architectural review and site measurements", 5.0, true, "Updated drawings provided to team"),
];

const PROGRESS_ENTRIES: &[(i64, &str, &str, f64, &str)] = &[
    (1, "2023-03-15", "Foundation Complete", 15.0, "On schedule"),
    (1, "2023-06-30", "Structural Framing Complete", 35.0, "On schedule"),
    (1, "2023-09-30", "Exterior Shell Complete", 60.0, "2 weeks behind schedule"),
    (3, "2023-01-15", "Site Preparation Complete", 10.0, "On schedule"),
    (3, "2023-04-30", "Foundation and Framing Complete", 30.0, "On schedule"),
    (3, "2023-08-15", "Buildings Enclosed", 65.0, "On schedule"),
    (3, "2023-11-30", "Interior Finishing Complete", 95.0, "Ahead of schedule"),
    (4, "2023-07-15", "Traffic Management Implemented", 20.0, "On schedule"),
    (4, "2023-09-30", "Structural Reinforcement Phase 1", 40.0, "On schedule"),
    (5, "2023-09-20", "Foundation Complete", 25.0, "1 week behind schedule"),
];

impl SeedService {
    /// Insert the sample data set unless the database already has projects.
    /// Returns whether anything was inserted.
    pub async fn seed_if_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        if count > 0 {
            tracing::debug!("sample data already present, skipping seed");
            return Ok(false);
        }

        for p in PROJECTS {
            sqlx::query(
                "INSERT INTO projects (name, location, start_date, end_date, budget, status, client, description)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(p.0).bind(p.1).bind(p.2).bind(p.3).bind(p.4).bind(p.5).bind(p.6).bind(p.7)
            .execute(pool)
            .await?;
        }

        for t in TASKS {
            sqlx::query(
                "INSERT INTO tasks (project_id, name, description, start_date, end_date, status, priority)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(t.0).bind(t.1).bind(t.2).bind(t.3).bind(t.4).bind(t.5).bind(t.6)
            .execute(pool)
            .await?;
        }

        for w in WORKERS {
            sqlx::query(
                "INSERT INTO workers (name, role, contact, certification, availability, hourly_rate)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(w.0).bind(w.1).bind(w.2).bind(w.3).bind(w.4).bind(w.5)
            .execute(pool)
            .await?;
        }

        for m in MATERIALS {
            sqlx::query(
                "INSERT INTO materials (name, category, quantity, unit, cost_per_unit, supplier)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(m.0).bind(m.1).bind(m.2).bind(m.3).bind(m.4).bind(m.5)
            .execute(pool)
            .await?;
        }

        for s in SAFETY_INCIDENTS {
            sqlx::query(
                "INSERT INTO safety_incidents (project_id, date, incident_type, description, severity, resolved, action_taken)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(s.0).bind(s.1).bind(s.2).bind(s.3).bind(s.4).bind(s.5).bind(s.6)
            .execute(pool)
            .await?;
        }

        for e in EQUIPMENT {
            sqlx::query(
                "INSERT INTO equipment (name, equipment_type, status, last_maintenance, next_maintenance, notes)
                 VALUES (?, ?, ?, ?, ?, ?)",
            )
            .bind(e.0).bind(e.1).bind(e.2).bind(e.3).bind(e.4).bind(e.5)
            .execute(pool)
            .await?;
        }

        for c in SAFETY_CHECKLISTS {
            sqlx::query(
                "INSERT INTO safety_checklists (project_id, date, inspector, ppe_compliance, hazard_signage, equipment_safety, fire_safety, first_aid, notes)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(c.0).bind(c.1).bind(c.2).bind(c.3).bind(c.4).bind(c.5).bind(c.6).bind(c.7).bind(c.8)
            .execute(pool)
            .await?;
        }

        for d in DAILY_TASKS {
            sqlx::query(
                "INSERT INTO daily_tasks (project_id, worker_id, date, task_description, hours_worked, completed, notes)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(d.0).bind(d.1).bind(d.2).bind(d.3).bind(d.4).bind(d.5).bind(d.6)
            .execute(pool)
            .await?;
        }

        for p in PROGRESS_ENTRIES {
            sqlx::query(
                "INSERT INTO progress_entries (project_id, date, milestone, percent_complete, notes)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(p.0).bind(p.1).bind(p.2).bind(p.3).bind(p.4)
            .execute(pool)
            .await?;
        }

        tracing::info!("inserted sample data set");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_utils::setup_test_pool;

    #[tokio::test]
    async fn seed_runs_once() {
        let pool = setup_test_pool().await;
        assert!(SeedService::seed_if_empty(&pool).await.unwrap());
        assert!(!SeedService::seed_if_empty(&pool).await.unwrap());

        let projects: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(projects, 5);

        let workers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM workers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(workers, 10);
    }
}
