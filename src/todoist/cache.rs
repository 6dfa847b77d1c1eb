use std::collections::HashMap;

use super::model::Project;

/// Case-insensitive name-to-project cache.
///
/// Entries are keyed by the lowercased name and store the resolution outcome,
/// so a name known to be absent is also a hit (`Some(None)`) and does not
/// trigger another project listing. The client runs on one logical thread;
/// no interior locking.
#[derive(Debug, Default)]
pub struct ProjectCache {
    entries: HashMap<String, Option<Project>>,
}

impl ProjectCache {
    fn key(name: &str) -> String {
        name.to_lowercase()
    }

    /// Outer `None` means the name has never been resolved; inner `None`
    /// means it resolved to "no such project".
    pub fn get(&self, name: &str) -> Option<Option<Project>> {
        self.entries.get(&Self::key(name)).cloned()
    }

    pub fn store(&mut self, name: &str, project: Option<Project>) {
        self.entries.insert(Self::key(name), project);
    }

    /// Drop one name so the next resolution refetches.
    pub fn invalidate(&mut self, name: &str) {
        self.entries.remove(&Self::key(name));
    }

    /// Drop every entry resolving to the given project id. Used after a
    /// project deletion, where the caller holds the id, not the name.
    pub fn invalidate_id(&mut self, id: &str) {
        self.entries
            .retain(|_, entry| entry.as_ref().map(|p| p.id.as_str()) != Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: &str) -> Project {
        Project {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let mut cache = ProjectCache::default();
        cache.store("Work", Some(project("1", "Work")));
        assert_eq!(cache.get("work").unwrap().unwrap().id, "1");
        assert_eq!(cache.get("WORK").unwrap().unwrap().id, "1");
    }

    #[test]
    fn test_negative_entry_is_a_hit() {
        let mut cache = ProjectCache::default();
        cache.store("Ghost", None);
        assert_eq!(cache.get("ghost"), Some(None));
        assert_eq!(cache.get("other"), None);
    }

    #[test]
    fn test_invalidate_by_name() {
        let mut cache = ProjectCache::default();
        cache.store("Work", Some(project("1", "Work")));
        cache.invalidate("WORK");
        assert_eq!(cache.get("work"), None);
    }

    #[test]
    fn test_invalidate_by_id_keeps_others() {
        let mut cache = ProjectCache::default();
        cache.store("Work", Some(project("1", "Work")));
        cache.store("Home", Some(project("2", "Home")));
        cache.store("Ghost", None);
        cache.invalidate_id("1");
        assert_eq!(cache.get("work"), None);
        assert_eq!(cache.get("home").unwrap().unwrap().id, "2");
        assert_eq!(cache.get("ghost"), Some(None));
    }
}
