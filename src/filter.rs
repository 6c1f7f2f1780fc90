//! Tag filtering over the project catalog.
//!
//! Everything here is a pure function of `(catalog, state)`. State changes are
//! value replacements: [`FilterState::toggle_tag`] and
//! [`FilterState::clear_filters`] hand back a new state and leave the input
//! untouched. [`FilterSession`] pairs a state with the carousel cursor so that
//! the cursor is reset whenever the selected tags change.

use std::collections::{BTreeMap, BTreeSet};

use crate::catalog::Project;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    selected: BTreeSet<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_tag(&self, tag: &str) -> Self {
        let mut selected = self.selected.clone();
        if !selected.remove(tag) {
            selected.insert(tag.to_string());
        }
        Self { selected }
    }

    pub fn clear_filters(&self) -> Self {
        Self::default()
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected.contains(tag)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(String::as_str)
    }

    /// All selected tags must be on the project (AND, not OR).
    pub fn matches(&self, project: &Project) -> bool {
        self.selected.iter().all(|tag| project.has_tag(tag))
    }
}

/// Union of every project's tags, sorted ascending (case-sensitive).
pub fn list_all_tags(catalog: &[Project]) -> Vec<String> {
    catalog
        .iter()
        .flat_map(|p| p.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Number of projects carrying each tag.
pub fn tag_counts(catalog: &[Project]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for project in catalog {
        for tag in project.tags.iter().collect::<BTreeSet<_>>() {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
    }
    counts
}

pub fn visible_projects<'a>(catalog: &'a [Project], state: &FilterState) -> Vec<&'a Project> {
    catalog.iter().filter(|p| state.matches(p)).collect()
}

/// Emitted when the selected tag set changes. Views built on
/// [`visible_projects`] must treat their cursor as reset to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChange {
    pub selected: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSession {
    state: FilterState,
    active_index: usize,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn toggle(&mut self, tag: &str) -> Option<FilterChange> {
        let next = self.state.toggle_tag(tag);
        self.replace(next)
    }

    pub fn clear(&mut self) -> Option<FilterChange> {
        let next = self.state.clear_filters();
        self.replace(next)
    }

    fn replace(&mut self, next: FilterState) -> Option<FilterChange> {
        if next == self.state {
            return None;
        }
        self.state = next;
        self.active_index = 0;
        Some(FilterChange {
            selected: self.state.selected().map(str::to_string).collect(),
        })
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            self.active_index = 0;
            return;
        }
        self.active_index = (self.active_index + 1) % len;
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            self.active_index = 0;
            return;
        }
        self.active_index = match self.active_index {
            0 => len - 1,
            i => (i - 1).min(len - 1),
        };
    }

    pub fn select(&mut self, index: usize, len: usize) {
        self.active_index = index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn project(title: &str, tags: &[&str]) -> Project {
        Project {
            title: title.to_string(),
            description: String::new(),
            code: None,
            demo_image: None,
            demo_gradient: String::new(),
            demo_type: Default::default(),
            demo_url: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            live_link: None,
            github_link: None,
            status: String::new(),
            year: String::new(),
            languages: Vec::new(),
        }
    }

    fn scenario_catalog() -> Vec<Project> {
        vec![
            project("A", &["Python", "React"]),
            project("B", &["React"]),
        ]
    }

    fn larger_catalog() -> Vec<Project> {
        vec![
            project("Analyzer", &["Python", "Flask", "React", "TypeScript"]),
            project("Pacman", &["Python", "Machine Learning"]),
            project("Dashboard", &["React", "Node.js", "MongoDB"]),
            project("Design System", &["React", "TypeScript", "Tailwind"]),
            project("Tracker", &["Vue.js", "Redis"]),
        ]
    }

    fn titles<'a>(projects: &[&'a Project]) -> Vec<&'a str> {
        projects.iter().map(|p| p.title.as_str()).collect()
    }

    fn state_of(tags: &[&str]) -> FilterState {
        tags.iter()
            .fold(FilterState::new(), |state, tag| state.toggle_tag(tag))
    }

    #[test]
    fn test_scenario_narrowing() {
        let catalog = scenario_catalog();
        assert_eq!(list_all_tags(&catalog), vec!["Python", "React"]);

        let state = FilterState::new().toggle_tag("React");
        assert!(state.is_selected("React"));
        assert_eq!(titles(&visible_projects(&catalog, &state)), vec!["A", "B"]);

        let state = state.toggle_tag("Python");
        assert_eq!(state.selected().collect::<Vec<_>>(), vec!["Python", "React"]);
        assert_eq!(titles(&visible_projects(&catalog, &state)), vec!["A"]);
    }

    #[test]
    fn test_no_matches_then_clear() {
        let catalog = scenario_catalog();
        let state = FilterState::new().toggle_tag("Haskell");
        assert!(visible_projects(&catalog, &state).is_empty());

        let cleared = state.clear_filters();
        assert!(cleared.is_empty());
        assert_eq!(titles(&visible_projects(&catalog, &cleared)), vec!["A", "B"]);
    }

    #[test]
    fn test_clear_restores_full_catalog() {
        let catalog = larger_catalog();
        for tags in [&[][..], &["React"], &["React", "TypeScript"], &["nope"]] {
            let state = state_of(tags).clear_filters();
            let visible = visible_projects(&catalog, &state);
            assert_eq!(visible.len(), catalog.len());
            assert!(visible.iter().zip(catalog.iter()).all(|(a, b)| *a == b));
        }
    }

    #[test]
    fn test_toggle_is_own_inverse() {
        for tags in [&[][..], &["React"], &["Python", "Flask"]] {
            let state = state_of(tags);
            for tag in ["React", "Python", "Go"] {
                assert_eq!(state.toggle_tag(tag).toggle_tag(tag), state);
            }
        }
    }

    #[test]
    fn test_toggle_does_not_mutate_input() {
        let state = FilterState::new();
        let toggled = state.toggle_tag("React");
        assert!(state.is_empty());
        assert_eq!(toggled.len(), 1);
    }

    #[test]
    fn test_visible_preserves_catalog_order() {
        let catalog = larger_catalog();
        for tags in [&[][..], &["React"], &["Python"], &["TypeScript"]] {
            let visible = visible_projects(&catalog, &state_of(tags));
            let positions = visible
                .iter()
                .map(|v| {
                    catalog
                        .iter()
                        .position(|p| p.title == v.title)
                        .expect("visible project should come from catalog")
                })
                .collect::<Vec<_>>();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_adding_filters_never_widens() {
        let catalog = larger_catalog();
        let chains: [&[&str]; 2] = [
            &["React", "TypeScript", "Tailwind", "Go"],
            &["Vue.js", "Redis", "React"],
        ];
        for chain in chains {
            let mut state = FilterState::new();
            let mut prev = visible_projects(&catalog, &state);
            for tag in chain {
                state = state.toggle_tag(tag);
                let next = visible_projects(&catalog, &state);
                assert!(next.iter().all(|p| prev.contains(p)), "{tag} widened");
                assert!(next.len() <= prev.len());
                prev = next;
            }
            assert!(prev.is_empty());
        }

        let tracker = visible_projects(&catalog, &state_of(&["Vue.js", "Redis"]));
        assert_eq!(titles(&tracker), vec!["Tracker"]);
    }

    #[test]
    fn test_list_all_tags_sorted_unique() {
        let catalog = larger_catalog();
        let tags = list_all_tags(&catalog);
        assert!(tags.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(tags.first().map(String::as_str), Some("Flask"));
        assert!(tags.contains(&"Machine Learning".to_string()));
        // case-sensitive: uppercase sorts before lowercase
        let mixed = vec![project("x", &["react", "React", "Zig"])];
        assert_eq!(list_all_tags(&mixed), vec!["React", "Zig", "react"]);
        assert!(list_all_tags(&[]).is_empty());
    }

    #[test]
    fn test_tag_counts() {
        let counts = tag_counts(&larger_catalog());
        assert_eq!(counts.get("React"), Some(&3));
        assert_eq!(counts.get("Python"), Some(&2));
        assert_eq!(counts.get("Redis"), Some(&1));
        assert_eq!(counts.get("Go"), None);
    }

    #[test]
    fn test_embedded_catalog_filters() {
        let catalog = Catalog::embedded().unwrap();
        let all = list_all_tags(catalog.projects());
        assert!(all.contains(&"Python".to_string()));

        let python = FilterState::new().toggle_tag("Python");
        assert_eq!(
            visible_projects(catalog.projects(), &python).len(),
            catalog.len()
        );

        let flask = python.toggle_tag("Flask");
        assert_eq!(
            titles(&visible_projects(catalog.projects(), &flask)),
            vec!["Python Static Code Analyzer"]
        );
    }

    #[test]
    fn test_session_resets_index_on_change() {
        let catalog = larger_catalog();
        let mut session = FilterSession::new();
        let len = visible_projects(&catalog, session.state()).len();
        session.select(3, len);
        assert_eq!(session.active_index(), 3);

        let change = session.toggle("React").expect("selection should change");
        assert_eq!(change.selected, vec!["React"]);
        assert_eq!(session.active_index(), 0);

        let len = visible_projects(&catalog, session.state()).len();
        session.next(len);
        session.next(len);
        assert_eq!(session.active_index(), 2);

        assert!(session.toggle("React").is_some());
        assert_eq!(session.active_index(), 0);
        assert_eq!(
            visible_projects(&catalog, session.state()).len(),
            catalog.len()
        );
    }

    #[test]
    fn test_session_clear_without_selection_is_noop() {
        let mut session = FilterSession::new();
        session.select(1, 5);
        assert!(session.clear().is_none());
        assert_eq!(session.active_index(), 1);

        session.toggle("Python");
        session.select(1, 2);
        let change = session.clear().expect("clearing a selection is a change");
        assert!(change.selected.is_empty());
        assert_eq!(session.active_index(), 0);
        assert!(session.state().is_empty());
    }

    #[test]
    fn test_session_cursor_wraps() {
        let mut session = FilterSession::new();
        session.prev(3);
        assert_eq!(session.active_index(), 2);
        session.next(3);
        assert_eq!(session.active_index(), 0);
        session.select(10, 3);
        assert_eq!(session.active_index(), 2);
        session.next(0);
        assert_eq!(session.active_index(), 0);
        session.prev(0);
        assert_eq!(session.active_index(), 0);
    }
}
