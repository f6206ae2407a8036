use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "project_manager";
pub const DEFAULT_PREFERENCE: &str = "balanced";

/// How a tile is rendered. The `simplified_*` variants back the
/// non-technical preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualizationFormat {
    DetailedTable,
    SummaryTable,
    BarChart,
    Timeline,
    TimelineWithDetails,
    SimplifiedTable,
    SimplifiedBarChart,
    SimplifiedTimeline,
}

/// One dashboard tile, ready for rendering. Lower priority sorts first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileDescriptor {
    pub tile_id: String,
    pub priority: u32,
    pub visualization_format: VisualizationFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub role: String,
    pub visualization_preference: String,
    pub tile_configuration: Vec<TileDescriptor>,
}

/// Per-role tile priorities. Entry order matters: it is the tie-break for
/// tiles sharing a priority, so rows are kept as ordered pairs rather than
/// a map.
#[derive(Debug, Clone)]
pub struct RolePriorityTable {
    roles: Vec<(&'static str, Vec<(&'static str, u32)>)>,
}

impl RolePriorityTable {
    fn get(&self, role: &str) -> Option<&[(&'static str, u32)]> {
        self.roles
            .iter()
            .find(|(name, _)| *name == role)
            .map(|(_, tiles)| tiles.as_slice())
    }
}

/// Per-preference tile formats.
#[derive(Debug, Clone)]
pub struct FormatPreferenceTable {
    preferences: Vec<(&'static str, HashMap<&'static str, VisualizationFormat>)>,
}

impl FormatPreferenceTable {
    fn get(&self, preference: &str) -> Option<&HashMap<&'static str, VisualizationFormat>> {
        self.preferences
            .iter()
            .find(|(name, _)| *name == preference)
            .map(|(_, formats)| formats)
    }
}

/// Immutable dashboard configuration, built once at startup and shared by
/// reference. Resolution never fails: unknown roles and preferences fall
/// back to `project_manager` and `balanced`.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    role_priorities: RolePriorityTable,
    format_preferences: FormatPreferenceTable,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardConfig {
    pub fn new() -> Self {
        Self {
            role_priorities: default_role_priorities(),
            format_preferences: default_format_preferences(),
        }
    }

    /// Turn `(role, preference)` into an ordered tile list.
    ///
    /// Pure over the static tables: normalizes the role, substitutes
    /// defaults for unknown inputs, resolves each tile's format (falling
    /// back to `summary_table`), then stable-sorts ascending by priority.
    pub fn resolve(&self, role: &str, visualization_preference: &str) -> DashboardLayout {
        let role = normalize_role(role);

        let tiles = match self.role_priorities.get(&role) {
            Some(tiles) => tiles,
            None => {
                tracing::debug!("unknown role '{role}', using {DEFAULT_ROLE} layout");
                self.role_priorities
                    .get(DEFAULT_ROLE)
                    .expect("default role row must exist")
            }
        };

        let formats = match self.format_preferences.get(visualization_preference) {
            Some(formats) => formats,
            None => {
                tracing::debug!(
                    "unknown visualization preference '{visualization_preference}', using {DEFAULT_PREFERENCE}"
                );
                self.format_preferences
                    .get(DEFAULT_PREFERENCE)
                    .expect("default preference map must exist")
            }
        };

        let mut tile_configuration: Vec<TileDescriptor> = tiles
            .iter()
            .map(|(tile_id, priority)| TileDescriptor {
                tile_id: (*tile_id).to_string(),
                priority: *priority,
                visualization_format: formats
                    .get(tile_id)
                    .copied()
                    .unwrap_or(VisualizationFormat::SummaryTable),
            })
            .collect();

        // Stable: ties keep the role table's entry order.
        tile_configuration.sort_by_key(|tile| tile.priority);

        DashboardLayout {
            role,
            visualization_preference: visualization_preference.to_string(),
            tile_configuration,
        }
    }
}

/// Lowercase with spaces replaced by underscores, so "Site Supervisor"
/// and "site_supervisor" address the same row.
pub fn normalize_role(role: &str) -> String {
    role.to_lowercase().replace(' ', "_")
}

fn default_role_priorities() -> RolePriorityTable {
    RolePriorityTable {
        roles: vec![
            (
                "project_manager",
                vec![
                    ("project_overview", 1),
                    ("task_progress", 2),
                    ("team_members", 3),
                    ("project_timeline", 3),
                    ("progress_tracking", 4),
                    ("material_inventory", 5),
                    ("safety_incidents", 4),
                    ("equipment_status", 6),
                    ("daily_tasks", 7),
                ],
            ),
            (
                "ceo",
                vec![
                    ("project_overview", 1),
                    ("project_timeline", 2),
                    ("progress_tracking", 3),
                    ("team_members", 4),
                    ("safety_incidents", 5),
                    ("material_inventory", 6),
                    ("equipment_status", 7),
                    ("task_progress", 3),
                    ("daily_tasks", 8),
                ],
            ),
            (
                "site_supervisor",
                vec![
                    ("task_progress", 1),
                    ("project_overview", 2),
                    ("team_members", 3),
                    ("daily_tasks", 3),
                    ("progress_tracking", 4),
                    ("material_inventory", 5),
                    ("equipment_status", 6),
                    ("project_timeline", 7),
                    ("safety_incidents", 4),
                ],
            ),
            (
                "safety_officer",
                vec![
                    ("safety_incidents", 1),
                    ("progress_tracking", 2),
                    ("daily_tasks", 3),
                    ("project_timeline", 4),
                    ("project_overview", 5),
                    ("task_progress", 6),
                    ("team_members", 7),
                    ("equipment_status", 8),
                    ("material_inventory", 9),
                ],
            ),
            (
                "construction_worker",
                vec![
                    ("task_progress", 1),
                    ("daily_tasks", 2),
                    ("material_inventory", 2),
                    ("safety_incidents", 3),
                    ("team_members", 4),
                    ("progress_tracking", 5),
                    ("equipment_status", 5),
                    ("project_overview", 6),
                    ("project_timeline", 7),
                ],
            ),
            (
                "inventory_manager",
                vec![
                    ("material_inventory", 1),
                    ("equipment_status", 2),
                    ("progress_tracking", 4),
                    ("daily_tasks", 5),
                    ("project_timeline", 6),
                    ("project_overview", 7),
                    ("team_members", 9),
                    ("task_progress", 8),
                    ("safety_incidents", 10),
                ],
            ),
        ],
    }
}

fn default_format_preferences() -> FormatPreferenceTable {
    use VisualizationFormat::*;

    let technical = HashMap::from([
        ("project_overview", DetailedTable),
        ("task_progress", DetailedTable),
        ("team_members", DetailedTable),
        ("material_inventory", DetailedTable),
        ("safety_incidents", DetailedTable),
        ("equipment_status", DetailedTable),
        ("project_timeline", TimelineWithDetails),
        ("daily_tasks", DetailedTable),
        ("progress_tracking", DetailedTable),
    ]);

    let balanced = HashMap::from([
        ("project_overview", SummaryTable),
        ("task_progress", BarChart),
        ("team_members", SummaryTable),
        ("material_inventory", SummaryTable),
        ("safety_incidents", SummaryTable),
        ("equipment_status", SummaryTable),
        ("project_timeline", Timeline),
        ("daily_tasks", SummaryTable),
        ("progress_tracking", BarChart),
    ]);

    let non_technical = HashMap::from([
        ("project_overview", SimplifiedBarChart),
        ("task_progress", SimplifiedBarChart),
        ("team_members", SimplifiedTable),
        ("material_inventory", SimplifiedTable),
        ("safety_incidents", SimplifiedTable),
        ("equipment_status", SimplifiedTable),
        ("project_timeline", SimplifiedTimeline),
        ("daily_tasks", SimplifiedTable),
        ("progress_tracking", SimplifiedBarChart),
    ]);

    FormatPreferenceTable {
        preferences: vec![
            ("technical", technical),
            ("balanced", balanced),
            ("non_technical", non_technical),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNOWN_ROLES: [&str; 6] = [
        "project_manager",
        "ceo",
        "site_supervisor",
        "safety_officer",
        "construction_worker",
        "inventory_manager",
    ];

    fn assert_sorted(layout: &DashboardLayout) {
        let priorities: Vec<u32> = layout
            .tile_configuration
            .iter()
            .map(|t| t.priority)
            .collect();
        let mut sorted = priorities.clone();
        sorted.sort();
        assert_eq!(priorities, sorted, "tiles not sorted for {}", layout.role);
    }

    #[test]
    fn every_known_role_resolves_sorted_and_non_empty() {
        let config = DashboardConfig::new();
        for role in KNOWN_ROLES {
            let layout = config.resolve(role, "balanced");
            assert!(!layout.tile_configuration.is_empty());
            assert_sorted(&layout);
        }
    }

    #[test]
    fn unknown_role_falls_back_to_project_manager() {
        let config = DashboardConfig::new();
        let fallback = config.resolve("quantity_surveyor", "technical");
        let default = config.resolve("project_manager", "technical");
        assert_eq!(
            fallback.tile_configuration,
            default.tile_configuration
        );
    }

    #[test]
    fn unknown_preference_falls_back_to_balanced() {
        let config = DashboardConfig::new();
        let fallback = config.resolve("ceo", "extremely_technical");
        let balanced = config.resolve("ceo", "balanced");
        assert_eq!(fallback.tile_configuration, balanced.tile_configuration);
    }

    #[test]
    fn resolve_is_idempotent() {
        let config = DashboardConfig::new();
        let first = config.resolve("safety_officer", "technical");
        let second = config.resolve("safety_officer", "technical");
        assert_eq!(first.tile_configuration, second.tile_configuration);
        assert_eq!(first.role, second.role);
    }

    #[test]
    fn ties_keep_source_order() {
        // project_manager has team_members and project_timeline both at 3,
        // and progress_tracking and safety_incidents both at 4, in that
        // source order.
        let config = DashboardConfig::new();
        let layout = config.resolve("project_manager", "balanced");
        let ids: Vec<&str> = layout
            .tile_configuration
            .iter()
            .map(|t| t.tile_id.as_str())
            .collect();

        let team = ids.iter().position(|id| *id == "team_members").unwrap();
        let timeline = ids.iter().position(|id| *id == "project_timeline").unwrap();
        assert!(team < timeline);

        let progress = ids.iter().position(|id| *id == "progress_tracking").unwrap();
        let safety = ids.iter().position(|id| *id == "safety_incidents").unwrap();
        assert!(progress < safety);
    }

    #[test]
    fn site_supervisor_technical_layout() {
        let config = DashboardConfig::new();
        let layout = config.resolve("site_supervisor", "technical");

        let task = layout
            .tile_configuration
            .iter()
            .position(|t| t.tile_id == "task_progress")
            .unwrap();
        let overview = layout
            .tile_configuration
            .iter()
            .position(|t| t.tile_id == "project_overview")
            .unwrap();
        assert!(task < overview);
        assert_eq!(layout.tile_configuration[task].priority, 1);
        assert_eq!(layout.tile_configuration[overview].priority, 2);

        // The technical table renders every plain tile as a detailed table;
        // the timeline tile is the one exception.
        for tile in &layout.tile_configuration {
            if tile.tile_id == "project_timeline" {
                assert_eq!(
                    tile.visualization_format,
                    VisualizationFormat::TimelineWithDetails
                );
            } else {
                assert_eq!(tile.visualization_format, VisualizationFormat::DetailedTable);
            }
        }
    }

    #[test]
    fn ceo_non_technical_layout() {
        let config = DashboardConfig::new();
        let layout = config.resolve("CEO", "non_technical");
        assert_eq!(layout.role, "ceo");

        let first = &layout.tile_configuration[0];
        assert_eq!(first.tile_id, "project_overview");
        assert_eq!(first.priority, 1);
        assert_eq!(
            first.visualization_format,
            VisualizationFormat::SimplifiedBarChart
        );
    }

    #[test]
    fn role_normalization_handles_spaces_and_case() {
        let config = DashboardConfig::new();
        let layout = config.resolve("Site Supervisor", "balanced");
        assert_eq!(layout.role, "site_supervisor");
        assert_eq!(layout.tile_configuration[0].tile_id, "task_progress");
    }

    #[test]
    fn formats_serialize_as_snake_case_strings() {
        let json =
            serde_json::to_value(VisualizationFormat::SimplifiedBarChart).unwrap();
        assert_eq!(json, "simplified_bar_chart");
        let json = serde_json::to_value(VisualizationFormat::TimelineWithDetails).unwrap();
        assert_eq!(json, "timeline_with_details");
    }
}
