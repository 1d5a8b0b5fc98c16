//! Colors for world entities (CSS color strings)

use crate::sim::{BackgroundKind, PlatformKind, Pose, SweetKind};

pub const SKY: &str = "#87ceeb";
pub const HUD_TEXT: &str = "#ffffff";
pub const OVERLAY: &str = "rgba(0, 0, 0, 0.55)";

pub fn platform_color(kind: PlatformKind) -> &'static str {
    match kind {
        PlatformKind::Normal => "#6b4226",
        PlatformKind::Brick => "#b5542d",
        PlatformKind::Question => "#f2b705",
        PlatformKind::Spike => "#9a9a9a",
        PlatformKind::Barrier => "#c0392b",
    }
}

/// Heavier sweets are warmer
pub fn sweet_color(kind: SweetKind) -> &'static str {
    match kind {
        SweetKind::Dhokla => "#f4d35e",
        SweetKind::Mithai => "#f7a072",
        SweetKind::Vadapav => "#d98c45",
        SweetKind::Jalebi => "#ee6c1f",
        SweetKind::Ladoo => "#e8a317",
    }
}

pub fn background_color(kind: BackgroundKind) -> &'static str {
    match kind {
        BackgroundKind::Temple => "rgba(180, 120, 80, 0.45)",
        BackgroundKind::Tree => "rgba(40, 120, 60, 0.5)",
        BackgroundKind::Cloud => "rgba(255, 255, 255, 0.8)",
    }
}

pub fn player_color(pose: Pose) -> &'static str {
    match pose {
        Pose::Idle => "#3066be",
        Pose::Run => "#2a5aa8",
        Pose::Jump => "#4a90e2",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ObstacleKind;

    #[test]
    fn test_obstacle_kinds_have_distinct_colors() {
        let colors: Vec<&str> = ObstacleKind::ALL
            .iter()
            .map(|k| platform_color(k.platform_kind()))
            .collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
        assert_ne!(platform_color(PlatformKind::Normal), colors[0]);
    }
}
