//! Page configuration.
//!
//! Every selector, attribute name, class name and timing the controllers use
//! lives here. The defaults describe the results page as the server renders
//! it; a page can override any subset by embedding JSON in
//! `<script type="application/json" id="gallery-config">`.

use crate::dom;
use serde::Deserialize;

pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub item_selector: String,
    pub container_selector: String,
    pub delete_button_selector: String,
    pub attrs: ItemAttrs,
    pub modal: ModalConfig,
    pub confirm: ConfirmConfig,
    pub filter: FilterMenu,
    pub sort: SortMenu,
    pub summary: SummarySlots,
    pub classes: ClassNames,
    pub storage: StorageKeys,
    pub delete_endpoint: String,
    pub removal_delay_ms: u32,
    pub toast_container_selector: String,
    pub toast_lifetime_ms: u32,
    pub fade_in_selector: String,
    pub fade_in_step_ms: u32,
    pub tooltip_selector: String,
    pub toast_selector: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            item_selector: ".result-card".into(),
            container_selector: ".row.results-container".into(),
            delete_button_selector: ".delete-btn".into(),
            attrs: ItemAttrs::default(),
            modal: ModalConfig::default(),
            confirm: ConfirmConfig::default(),
            filter: FilterMenu::default(),
            sort: SortMenu::default(),
            summary: SummarySlots::default(),
            classes: ClassNames::default(),
            storage: StorageKeys::default(),
            delete_endpoint: vg_api_types::DELETE_IMAGE_PREFIX.into(),
            removal_delay_ms: 300,
            toast_container_selector: ".toast-container".into(),
            toast_lifetime_ms: 5_000,
            fade_in_selector: ".card".into(),
            fade_in_step_ms: 100,
            tooltip_selector: r#"[data-bs-toggle="tooltip"]"#.into(),
            toast_selector: ".toast".into(),
        }
    }
}

/// Attribute names carried by each result item.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemAttrs {
    pub id: String,
    pub src: String,
    pub filename: String,
    pub result: String,
    pub subject: String,
}

impl Default for ItemAttrs {
    fn default() -> Self {
        Self {
            id: "data-id".into(),
            src: "data-src".into(),
            filename: "data-filename".into(),
            result: "data-result".into(),
            subject: "data-subject".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ModalConfig {
    pub id: String,
    pub image: String,
    pub filename: String,
    pub status: String,
    pub delete_button: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            id: "imageModal".into(),
            image: ".modal-image".into(),
            filename: ".modal-filename".into(),
            status: ".modal-status".into(),
            delete_button: ".modal-delete-btn".into(),
        }
    }
}

/// Optional second overlay asking for confirmation before a modal delete.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    pub id: String,
    pub confirm_button: String,
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            id: "deleteConfirmModal".into(),
            confirm_button: ".confirm-delete-btn".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FilterMenu {
    pub menu_id: String,
    pub option_selector: String,
    pub option_attr: String,
    pub info_text_id: String,
    pub clear_button_id: String,
}

impl Default for FilterMenu {
    fn default() -> Self {
        Self {
            menu_id: "filterDropdown".into(),
            option_selector: ".dropdown-item".into(),
            option_attr: "data-filter".into(),
            info_text_id: "filterInfoText".into(),
            clear_button_id: "clearFilterBtn".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SortMenu {
    pub menu_id: String,
    pub option_selector: String,
    pub option_attr: String,
}

impl Default for SortMenu {
    fn default() -> Self {
        Self {
            menu_id: "sortDropdown".into(),
            option_selector: ".dropdown-item".into(),
            option_attr: "data-sort".into(),
        }
    }
}

/// Selectors of the four count slots in the summary panel.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SummarySlots {
    pub total: String,
    pub detected: String,
    pub not_detected: String,
    pub unknown: String,
}

impl Default for SummarySlots {
    fn default() -> Self {
        Self {
            total: ".summary-value:nth-child(2)".into(),
            detected: ".summary-value:nth-child(5)".into(),
            not_detected: ".summary-value:nth-child(8)".into(),
            unknown: ".summary-value:nth-child(11)".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClassNames {
    pub hidden: String,
    pub pending: String,
    pub active: String,
    pub collapsed: String,
    pub shown: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            hidden: "hidden-item".into(),
            pending: "removing".into(),
            active: "active".into(),
            collapsed: "d-none".into(),
            shown: "show".into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub filter: String,
    pub sort: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            filter: "currentFilter".into(),
            sort: "currentSort".into(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Read the embedded override, falling back to defaults.
    pub fn load() -> Self {
        let Some(el) = dom::by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let raw = el.text_content().unwrap_or_default();
        match Self::from_json(&raw) {
            Ok(cfg) => cfg,
            Err(e) => {
                gloo_console::warn!(
                    format!("#{}: invalid JSON, using defaults:", CONFIG_ELEMENT_ID),
                    e.to_string()
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_override_is_default() {
        assert_eq!(GalleryConfig::from_json("  \n").unwrap(), GalleryConfig::default());
        assert_eq!(GalleryConfig::from_json("{}").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let cfg = GalleryConfig::from_json(
            r#"{
                "item_selector": ".image-card",
                "classes": { "pending": "image-removed", "active": "active-option" },
                "sort": { "menu_id": "sortOptions" }
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.item_selector, ".image-card");
        assert_eq!(cfg.classes.pending, "image-removed");
        assert_eq!(cfg.classes.active, "active-option");
        assert_eq!(cfg.classes.hidden, "hidden-item");
        assert_eq!(cfg.sort.menu_id, "sortOptions");
        assert_eq!(cfg.sort.option_attr, "data-sort");
        assert_eq!(cfg.filter.option_attr, "data-filter");
        assert_eq!(cfg.delete_endpoint, "/api/delete_image");
        assert_eq!(cfg.removal_delay_ms, 300);
    }

    #[test]
    fn malformed_override_is_an_error() {
        assert!(GalleryConfig::from_json("{ item_selector: }").is_err());
        assert!(GalleryConfig::from_json(r#"{"removal_delay_ms": "soon"}"#).is_err());
    }
}
