//! Reference resolution
//!
//! UI components point at entities by name. Resolution happens once at
//! ingestion: every component gets a direct entity reference (or `None`),
//! and every miss is reported as an [`UnresolvedReference`] instead of
//! being discovered later, deep inside rendering. An unresolved component
//! still renders; it degrades to an empty preview.

use super::{AppSpec, SpecEntity, SpecModule, SpecUi};

/// A UI component whose entity reference has been resolved.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedUi<'a> {
    pub ui: &'a SpecUi,
    /// Direct reference to the entity, `None` when the name did not match.
    pub entity: Option<&'a SpecEntity>,
}

/// A module with all of its UI components resolved.
#[derive(Debug, Clone)]
pub struct ResolvedModule<'a> {
    pub module: &'a SpecModule,
    pub components: Vec<ResolvedUi<'a>>,
}

/// An entity name that matched nothing in the owning module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub module: String,
    pub component: String,
    pub entity: String,
}

impl std::fmt::Display for UnresolvedReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "module '{}': component '{}' references unknown entity '{}'",
            self.module, self.component, self.entity
        )
    }
}

/// The whole specification after the ingestion pass.
#[derive(Debug, Clone)]
pub struct ResolvedSpec<'a> {
    pub spec: &'a AppSpec,
    pub modules: Vec<ResolvedModule<'a>>,
    pub unresolved: Vec<UnresolvedReference>,
}

impl<'a> ResolvedSpec<'a> {
    pub fn module(&self, index: usize) -> Option<&ResolvedModule<'a>> {
        self.modules.get(index)
    }
}

impl AppSpec {
    /// Resolve every soft entity reference in one pass.
    ///
    /// Misses are collected and logged; they do not fail ingestion.
    pub fn resolve(&self) -> ResolvedSpec<'_> {
        let mut unresolved = Vec::new();
        let modules = self
            .modules
            .iter()
            .map(|module| {
                let components = module
                    .ui
                    .iter()
                    .map(|ui| {
                        let entity = module.entity(&ui.entity);
                        if entity.is_none() {
                            let miss = UnresolvedReference {
                                module: module.name.clone(),
                                component: ui.label(),
                                entity: ui.entity.clone(),
                            };
                            log::warn!("unresolved entity reference: {}", miss);
                            unresolved.push(miss);
                        }
                        ResolvedUi { ui, entity }
                    })
                    .collect();
                ResolvedModule { module, components }
            })
            .collect();

        ResolvedSpec { spec: self, modules, unresolved }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldType, SpecField, UiKind};

    fn spec_with_dangling_reference() -> AppSpec {
        AppSpec {
            title: "T".to_string(),
            description: String::new(),
            modules: vec![SpecModule {
                name: "Sales".to_string(),
                purpose: "sell".to_string(),
                entities: vec![SpecEntity {
                    name: "Order".to_string(),
                    fields: vec![SpecField {
                        name: "total".to_string(),
                        field_type: FieldType::Number,
                        required: false,
                        unique: false,
                        max_length: None,
                        help_text: None,
                    }],
                }],
                apis: vec![],
                ui: vec![
                    SpecUi {
                        kind: UiKind::Table,
                        name: None,
                        entity: "Order".to_string(),
                        columns: None,
                        fields: None,
                    },
                    SpecUi {
                        kind: UiKind::Form,
                        name: None,
                        entity: "Invoice".to_string(),
                        columns: None,
                        fields: None,
                    },
                ],
            }],
            kpis: vec![],
        }
    }

    #[test]
    fn test_resolution_links_matching_entities() {
        let spec = spec_with_dangling_reference();
        let resolved = spec.resolve();

        let module = resolved.module(0).unwrap();
        assert!(module.components[0].entity.is_some());
        assert_eq!(module.components[0].entity.unwrap().name, "Order");
    }

    #[test]
    fn test_misses_are_reported_not_fatal() {
        let spec = spec_with_dangling_reference();
        let resolved = spec.resolve();

        assert_eq!(resolved.unresolved.len(), 1);
        let miss = &resolved.unresolved[0];
        assert_eq!(miss.module, "Sales");
        assert_eq!(miss.entity, "Invoice");

        // The component is still present, just without an entity
        let module = resolved.module(0).unwrap();
        assert!(module.components[1].entity.is_none());
    }

    #[test]
    fn test_out_of_range_module_index() {
        let spec = spec_with_dangling_reference();
        let resolved = spec.resolve();
        assert!(resolved.module(5).is_none());
    }
}
