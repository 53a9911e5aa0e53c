//! Series ordering and previous/next navigation

use serde::Serialize;

use super::Post;

/// Members of `series` in reading order.
///
/// Posts are ordered by `seriesOrder` (0 when unset). The sort is stable, so
/// posts sharing an order keep the order they had in `posts`.
pub fn members<'a>(posts: &'a [Post], series: &str) -> Vec<&'a Post> {
    let mut members: Vec<&Post> = posts
        .iter()
        .filter(|p| p.series() == Some(series))
        .collect();
    members.sort_by_key(|p| p.front_matter.order());
    members
}

/// Distinct series names in first-encountered order
pub fn names(posts: &[Post]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for series in posts.iter().filter_map(|p| p.series()) {
        if !names.iter().any(|n| n == series) {
            names.push(series.to_string());
        }
    }
    names
}

/// Where a post sits inside its series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesNav<'a> {
    /// 1-based position, `None` when the slug is not in the series
    pub position: Option<usize>,
    /// Number of posts in the series
    pub total: usize,
    pub prev: Option<&'a Post>,
    pub next: Option<&'a Post>,
}

impl<'a> SeriesNav<'a> {
    /// Locate `slug` in an already ordered series list
    pub fn locate(slug: &str, ordered: &[&'a Post]) -> Self {
        let total = ordered.len();
        let Some(pos) = ordered.iter().position(|p| p.slug == slug) else {
            return Self {
                position: None,
                total,
                prev: None,
                next: None,
            };
        };

        Self {
            position: Some(pos + 1),
            total,
            prev: pos.checked_sub(1).map(|i| ordered[i]),
            next: ordered.get(pos + 1).copied(),
        }
    }

    /// Whether there is anything to navigate to
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(slug: &str, series: Option<&str>, order: Option<i64>) -> Post {
        let mut post = Post::from_source(slug.to_string(), "", 200);
        post.front_matter.title = Some(slug.to_string());
        post.front_matter.series = series.map(str::to_string);
        post.front_matter.series_order = order;
        post
    }

    fn slugs(posts: &[&Post]) -> Vec<String> {
        posts.iter().map(|p| p.slug.clone()).collect()
    }

    #[test]
    fn test_members_sorted_by_order() {
        let posts = vec![
            post("second", Some("Foundations"), Some(2)),
            post("other", Some("Elsewhere"), Some(1)),
            post("first", Some("Foundations"), Some(1)),
            post("loose", None, None),
        ];
        assert_eq!(slugs(&members(&posts, "Foundations")), vec!["first", "second"]);
    }

    #[test]
    fn test_members_stable_for_unset_order() {
        let posts = vec![
            post("c", Some("S"), None),
            post("a", Some("S"), Some(0)),
            post("b", Some("S"), None),
            post("neg", Some("S"), Some(-1)),
        ];
        assert_eq!(slugs(&members(&posts, "S")), vec!["neg", "c", "a", "b"]);
    }

    #[test]
    fn test_unknown_series_is_empty() {
        let posts = vec![post("a", Some("S"), Some(1))];
        assert!(members(&posts, "Nope").is_empty());
    }

    #[test]
    fn test_names_first_encountered() {
        let posts = vec![
            post("a", Some("Beta"), None),
            post("b", None, None),
            post("c", Some("Alpha"), None),
            post("d", Some("Beta"), None),
            post("e", Some(""), None),
        ];
        assert_eq!(names(&posts), vec!["Beta", "Alpha"]);
    }

    #[test]
    fn test_locate_neighbors() {
        let posts = vec![
            post("p1", Some("S"), Some(1)),
            post("p2", Some("S"), Some(2)),
            post("p3", Some("S"), Some(3)),
        ];
        let ordered = members(&posts, "S");

        let first = SeriesNav::locate("p1", &ordered);
        assert_eq!(first.position, Some(1));
        assert_eq!(first.total, 3);
        assert!(first.prev.is_none());
        assert_eq!(first.next.map(|p| p.slug.as_str()), Some("p2"));

        let middle = SeriesNav::locate("p2", &ordered);
        assert_eq!(middle.prev.map(|p| p.slug.as_str()), Some("p1"));
        assert_eq!(middle.next.map(|p| p.slug.as_str()), Some("p3"));

        let last = SeriesNav::locate("p3", &ordered);
        assert_eq!(last.prev.map(|p| p.slug.as_str()), Some("p2"));
        assert!(last.next.is_none());
    }

    #[test]
    fn test_locate_adjacency_for_every_member() {
        let posts: Vec<_> = (0..5)
            .map(|i| post(&format!("part-{}", i), Some("S"), Some(5 - i)))
            .collect();
        let ordered = members(&posts, "S");
        for (i, member) in ordered.iter().enumerate() {
            let nav = SeriesNav::locate(&member.slug, &ordered);
            assert_eq!(nav.position, Some(i + 1));
            assert_eq!(nav.prev.map(|p| &p.slug), i.checked_sub(1).map(|j| &ordered[j].slug));
            assert_eq!(nav.next.map(|p| &p.slug), ordered.get(i + 1).map(|p| &p.slug));
        }
    }

    #[test]
    fn test_locate_missing_and_single() {
        let posts = vec![post("only", Some("S"), None)];
        let ordered = members(&posts, "S");

        let missing = SeriesNav::locate("ghost", &ordered);
        assert_eq!(missing.position, None);
        assert!(missing.is_empty());

        let single = SeriesNav::locate("only", &ordered);
        assert_eq!(single.position, Some(1));
        assert!(single.is_empty());
    }
}
