//! The name register: people and entities mentioned in an article, with titles.
//!
//! A single-word entity name that matches the last word of a name already in
//! the register is recorded as a reference to that name, so that `Clinton`
//! after `Hillary Rodham Clinton` points back at the full name instead of
//! being looked up on its own.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Looks up titles of people and definitions of entities.
pub trait TitleLookup {
    fn person_title(&self, name: &str) -> Option<String>;
    fn entity_definition(&self, name: &str) -> Option<String>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegisterEntry {
    #[serde(rename = "name")]
    Person { title: Option<String> },
    Entity { title: Option<String> },
    Ref {
        #[serde(rename = "fullname")]
        full_name: String,
    },
}

/// Registered names in order of first mention.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameRegister {
    entries: IndexMap<String, RegisterEntry>,
}

impl NameRegister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a register from person names, then entity names.
    ///
    /// With `all_names`, names without a title are registered too.
    pub fn build<'a, L>(
        persons: impl IntoIterator<Item = &'a str>,
        entities: impl IntoIterator<Item = &'a str>,
        lookup: &L,
        all_names: bool,
    ) -> Self
    where
        L: TitleLookup + ?Sized,
    {
        let mut register = Self::new();
        for name in persons {
            register.add_person(name, lookup, all_names);
        }
        for name in entities {
            register.add_entity(name, lookup, all_names);
        }
        tracing::debug!(entries = register.len(), "built name register");
        register
    }

    pub fn add_person<L>(&mut self, name: &str, lookup: &L, all_names: bool)
    where
        L: TitleLookup + ?Sized,
    {
        if self.entries.contains_key(name) {
            return;
        }
        let title = lookup.person_title(name);
        if title.is_some() || all_names {
            self.entries
                .insert(name.to_owned(), RegisterEntry::Person { title });
        }
    }

    pub fn add_entity<L>(&mut self, name: &str, lookup: &L, all_names: bool)
    where
        L: TitleLookup + ?Sized,
    {
        if self.entries.contains_key(name) {
            return;
        }
        if !name.contains(' ') {
            let full_name = self.entries.keys().find(|registered| {
                let mut words = registered.split_whitespace();
                words.next_back() == Some(name) && words.next().is_some()
            });
            if let Some(full_name) = full_name.cloned() {
                tracing::trace!(%name, %full_name, "registering last-name reference");
                self.entries
                    .insert(name.to_owned(), RegisterEntry::Ref { full_name });
                return;
            }
        }
        let title = lookup.entity_definition(name);
        if title.is_some() || all_names {
            self.entries
                .insert(name.to_owned(), RegisterEntry::Entity { title });
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegisterEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegisterEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Titles and definitions held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticTitles {
    pub persons: HashMap<String, String>,
    pub entities: HashMap<String, String>,
}

impl StaticTitles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, name: impl Into<String>, title: impl Into<String>) -> Self {
        self.persons.insert(name.into(), title.into());
        self
    }

    pub fn with_entity(mut self, name: impl Into<String>, definition: impl Into<String>) -> Self {
        self.entities.insert(name.into(), definition.into());
        self
    }
}

impl TitleLookup for StaticTitles {
    fn person_title(&self, name: &str) -> Option<String> {
        self.persons.get(name).cloned()
    }

    fn entity_definition(&self, name: &str) -> Option<String> {
        self.entities.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn titles() -> StaticTitles {
        StaticTitles::new()
            .with_person("Hillary Rodham Clinton", "utanríkisráðherra")
            .with_entity("Clinton", "borg í Iowa")
            .with_entity("Alþingi", "löggjafarþing Íslendinga")
    }

    #[test]
    fn test_last_name_becomes_reference() {
        let register = NameRegister::build(
            ["Hillary Rodham Clinton"],
            ["Clinton", "Alþingi"],
            &titles(),
            false,
        );
        assert_eq!(
            register.get("Clinton"),
            Some(&RegisterEntry::Ref {
                full_name: "Hillary Rodham Clinton".into()
            })
        );
        assert_eq!(
            register.get("Alþingi"),
            Some(&RegisterEntry::Entity {
                title: Some("löggjafarþing Íslendinga".into())
            })
        );
    }

    #[test]
    fn test_untitled_names_need_all_names() {
        let names = ["Jón Jónsson"];
        let entities = ["Sameinuðu þjóðirnar"];

        let strict = NameRegister::build(names, entities, &titles(), false);
        assert!(strict.is_empty());

        let all = NameRegister::build(names, entities, &titles(), true);
        let listed: Vec<(&str, &RegisterEntry)> = all.iter().collect();
        assert_eq!(
            listed,
            vec![
                ("Jón Jónsson", &RegisterEntry::Person { title: None }),
                ("Sameinuðu þjóðirnar", &RegisterEntry::Entity { title: None }),
            ]
        );
    }

    #[test]
    fn test_first_mention_wins() {
        let register = NameRegister::build(
            ["Hillary Rodham Clinton", "Hillary Rodham Clinton"],
            ["Hillary Rodham Clinton"],
            &titles(),
            true,
        );
        assert_eq!(register.len(), 1);
        assert_eq!(
            register.get("Hillary Rodham Clinton"),
            Some(&RegisterEntry::Person {
                title: Some("utanríkisráðherra".into())
            })
        );
    }

    #[test]
    fn test_serialized_form() {
        let register = NameRegister::build(["Hillary Rodham Clinton"], ["Clinton"], &titles(), false);
        assert_eq!(
            serde_json::to_string(&register).unwrap(),
            r#"{"Hillary Rodham Clinton":{"kind":"name","title":"utanríkisráðherra"},"Clinton":{"kind":"ref","fullname":"Hillary Rodham Clinton"}}"#
        );
    }
}
