use serde::{Deserialize, Serialize};

use super::styles;
use crate::utils::build_class_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonKind {
    Transparent,
}

impl ButtonKind {
    pub fn class(self) -> &'static str {
        match self {
            ButtonKind::Transparent => styles::transparent,
        }
    }
}

/// Everything the class attribute depends on, read from props in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonClassFlags {
    pub is_simple: bool,
    pub is_small: bool,
    pub is_primary: bool,
    pub is_disabled: bool,
    /// `None` when the caller never passed `is_loading`.
    pub is_loading: Option<bool>,
    pub is_round: bool,
    pub is_text: bool,
    pub is_destructive: bool,
    pub is_clicked: bool,
    pub class: Option<String>,
    pub kind: Option<ButtonKind>,
}

impl ButtonClassFlags {
    pub fn class_name(&self) -> String {
        let is_loading = self.is_loading.unwrap_or(false);
        let loading_class = build_class_name([
            self.is_loading.is_some().then_some(styles::loading_init),
            is_loading.then_some(styles::loading_start),
        ]);

        build_class_name([
            Some(styles::button),
            self.is_simple.then_some(styles::is_simple),
            self.is_small.then_some(styles::size_small),
            self.is_primary.then_some(styles::primary),
            is_disabled_attr(self.is_disabled, self.is_loading).then_some(styles::disabled),
            Some(loading_class.as_str()),
            self.is_round.then_some(styles::round),
            self.is_text.then_some(styles::is_text),
            self.is_destructive.then_some(styles::destructive),
            self.is_clicked.then_some(styles::clicked),
            self.class.as_deref(),
            self.kind.map(ButtonKind::class),
        ])
    }
}

/// `submit` when the button submits its own form or one named by id.
pub fn button_type(is_submit: bool, for_form_id: Option<&str>) -> &'static str {
    if is_submit || for_form_id.is_some_and(|id| !id.is_empty()) {
        "submit"
    } else {
        "button"
    }
}

/// Loading buttons are never interactive.
pub fn is_disabled_attr(is_disabled: bool, is_loading: Option<bool>) -> bool {
    is_disabled || is_loading.unwrap_or(false)
}

pub fn loading_dots_class(is_visible: bool) -> String {
    build_class_name([
        Some(styles::loading_dots),
        is_visible.then_some(styles::loading_dots_visible),
    ])
}
