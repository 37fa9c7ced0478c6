//! Content star placement: authored positions, or radial clusters keyed by
//! category or year. Deterministic for a given star set, mode and viewport bucket.

use std::f64::consts::TAU;

use crate::config::{CLUSTER_CENTER_RADIUS, CLUSTER_MEMBER_RADIUS, MEDIUM_MAX_WIDTH, NARROW_MAX_WIDTH};
use crate::model::{ClusterMode, DisplayPosition, Star};

pub const UNKNOWN_YEAR: &str = "Unknown";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewportBucket {
    Narrow,
    Medium,
    Wide,
}

impl ViewportBucket {
    pub fn from_width(width: f64) -> Self {
        if width < NARROW_MAX_WIDTH {
            ViewportBucket::Narrow
        } else if width < MEDIUM_MAX_WIDTH {
            ViewportBucket::Medium
        } else {
            ViewportBucket::Wide
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            ViewportBucket::Narrow => 0,
            ViewportBucket::Medium => 1,
            ViewportBucket::Wide => 2,
        }
    }

    pub fn center_radius(self) -> f64 {
        CLUSTER_CENTER_RADIUS[self.index()]
    }

    pub fn member_radius(self) -> f64 {
        CLUSTER_MEMBER_RADIUS[self.index()]
    }
}

/// First standalone run of exactly four digits in the label. Only ASCII
/// letters, digits and `_` join a word, so `2023年` still yields a year.
pub fn year_of(date: &str) -> Option<&str> {
    date.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .find(|word| word.len() == 4 && word.bytes().all(|b| b.is_ascii_digit()))
}

pub fn group_key(star: &Star, mode: ClusterMode) -> Option<String> {
    match mode {
        ClusterMode::Free => None,
        ClusterMode::Category => Some(star.category.clone()),
        ClusterMode::Year => Some(year_of(&star.date).unwrap_or(UNKNOWN_YEAR).to_string()),
    }
}

/// Stars sharing a key, in original order, plus the group's centre.
#[derive(Clone, Debug, PartialEq)]
pub struct ClusterGroup {
    pub key: String,
    pub members: Vec<usize>,
    pub center: DisplayPosition,
}

/// Groups in order of first appearance. Empty in free mode.
pub fn cluster_groups(stars: &[Star], mode: ClusterMode, bucket: ViewportBucket) -> Vec<ClusterGroup> {
    let mut groups: Vec<ClusterGroup> = Vec::new();
    for (i, star) in stars.iter().enumerate() {
        let Some(key) = group_key(star, mode) else {
            continue;
        };
        match groups.iter_mut().find(|g| g.key == key) {
            Some(g) => g.members.push(i),
            None => groups.push(ClusterGroup {
                key,
                members: vec![i],
                center: DisplayPosition { x: 50.0, y: 50.0 },
            }),
        }
    }
    let n = groups.len().max(1) as f64;
    let radius = bucket.center_radius();
    for (i, g) in groups.iter_mut().enumerate() {
        let angle = TAU * i as f64 / n;
        g.center = DisplayPosition {
            x: 50.0 + angle.cos() * radius,
            y: 50.0 + angle.sin() * radius,
        };
    }
    groups
}

/// Position of member `index` within a group of `count` around `center`.
pub fn member_position(center: DisplayPosition, index: usize, count: usize, radius: f64) -> DisplayPosition {
    let count = count.max(1);
    if count == 1 {
        return center;
    }
    let angle = TAU * index as f64 / count as f64;
    DisplayPosition {
        x: center.x + angle.cos() * radius,
        y: center.y + angle.sin() * radius,
    }
}

/// One position per star, aligned with `stars`.
pub fn display_positions(stars: &[Star], mode: ClusterMode, bucket: ViewportBucket) -> Vec<DisplayPosition> {
    let mut out: Vec<DisplayPosition> = stars.iter().map(|s| DisplayPosition { x: s.x, y: s.y }).collect();
    if mode == ClusterMode::Free {
        return out;
    }
    let radius = bucket.member_radius();
    for group in cluster_groups(stars, mode, bucket) {
        let count = group.members.len();
        for (j, &star_idx) in group.members.iter().enumerate() {
            out[star_idx] = member_position(group.center, j, count, radius);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn star(id: &str, category: &str, date: &str) -> Star {
        Star {
            id: id.to_string(),
            title: id.to_string(),
            excerpt: String::new(),
            content: String::new(),
            category: category.to_string(),
            date: date.to_string(),
            color: "#fff".to_string(),
            size: 10.0,
            x: 7.0,
            y: -3.0,
            speed: 10.0,
            delay: 0.0,
        }
    }

    fn close(a: DisplayPosition, b: DisplayPosition) -> bool {
        (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
    }

    #[test]
    fn buckets_follow_breakpoints() {
        assert_eq!(ViewportBucket::from_width(320.0), ViewportBucket::Narrow);
        assert_eq!(ViewportBucket::from_width(640.0), ViewportBucket::Medium);
        assert_eq!(ViewportBucket::from_width(1023.9), ViewportBucket::Medium);
        assert_eq!(ViewportBucket::from_width(1024.0), ViewportBucket::Wide);
        for b in [ViewportBucket::Narrow, ViewportBucket::Medium, ViewportBucket::Wide] {
            assert!(b.member_radius() < b.center_radius());
        }
        assert!(ViewportBucket::Narrow.center_radius() < ViewportBucket::Wide.center_radius());
    }

    #[test]
    fn year_extraction() {
        assert_eq!(year_of("Oct 12, 2023"), Some("2023"));
        assert_eq!(year_of("Unknown"), None);
        assert_eq!(year_of("12345 and 1999"), Some("1999"));
        assert_eq!(year_of("2023a 2024"), Some("2024"));
        assert_eq!(year_of("221B Baker St 1887, London 1900"), Some("1887"));
    }

    #[test]
    fn year_next_to_non_ascii_text() {
        assert_eq!(year_of("2023年10月12日"), Some("2023"));
        assert_eq!(year_of("é2023"), Some("2023"));
        assert_eq!(year_of("12 mars 2024 à Paris"), Some("2024"));
        assert_eq!(year_of("x_2023"), None);
    }

    #[test]
    fn free_mode_keeps_authored_positions() {
        let stars = vec![star("a", "X", "2020"), star("b", "Y", "2021")];
        let pos = display_positions(&stars, ClusterMode::Free, ViewportBucket::Wide);
        assert!(pos.iter().all(|p| *p == DisplayPosition { x: 7.0, y: -3.0 }));
        assert!(cluster_groups(&stars, ClusterMode::Free, ViewportBucket::Wide).is_empty());
    }

    #[test]
    fn single_member_sits_on_center() {
        let stars = vec![star("a", "X", "Jan 2020"), star("b", "Y", "Feb 2020"), star("c", "Z", "n/a")];
        let groups = cluster_groups(&stars, ClusterMode::Category, ViewportBucket::Medium);
        let pos = display_positions(&stars, ClusterMode::Category, ViewportBucket::Medium);
        assert_eq!(groups.len(), 3);
        for g in &groups {
            assert!(close(pos[g.members[0]], g.center));
        }
        // first group sits at angle 0
        assert!(close(groups[0].center, DisplayPosition { x: 78.0, y: 50.0 }));
    }

    #[test]
    fn year_groups_and_unknown_bucket() {
        let stars = vec![star("a", "X", "Jan 2020"), star("b", "Y", "Feb 2020"), star("c", "Z", "n/a")];
        let groups = cluster_groups(&stars, ClusterMode::Year, ViewportBucket::Wide);
        assert_eq!(groups.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(), vec!["2020", UNKNOWN_YEAR]);
        assert_eq!(groups[0].members, vec![0, 1]);
        let pos = display_positions(&stars, ClusterMode::Year, ViewportBucket::Wide);
        let c = groups[0].center;
        assert!(close(pos[0], DisplayPosition { x: c.x + 14.0, y: c.y }));
        assert!(close(pos[1], DisplayPosition { x: c.x - 14.0, y: c.y }));
        assert!(close(pos[2], groups[1].center));
    }

    #[test]
    fn empty_group_does_not_divide_by_zero() {
        let center = DisplayPosition { x: 10.0, y: 20.0 };
        assert_eq!(member_position(center, 0, 0, 12.0), center);
        assert!(cluster_groups(&[], ClusterMode::Year, ViewportBucket::Wide).is_empty());
        assert!(display_positions(&[], ClusterMode::Category, ViewportBucket::Narrow).is_empty());
    }

    #[test]
    fn layout_is_deterministic() {
        let cat = Catalog::new(|| 0.3);
        let stars = cat.list_content_stars();
        for mode in ClusterMode::ALL {
            let a = display_positions(stars, mode, ViewportBucket::Medium);
            let b = display_positions(stars, mode, ViewportBucket::Medium);
            assert_eq!(a, b);
            assert_eq!(a.len(), stars.len());
        }
        let years = cluster_groups(stars, ClusterMode::Year, ViewportBucket::Wide);
        assert_eq!(years.iter().map(|g| g.key.as_str()).collect::<Vec<_>>(), vec!["2023", "2024"]);
    }
}
