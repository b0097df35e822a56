//! Breakpoint-scoped layout configuration with inheritance.
//!
//! The cascade is strictly linear: `large` is the root, `medium` inherits
//! from it, `small` from `medium`. Inheritance is resolved lazily at read
//! time by walking toward the root until a breakpoint holds an explicit
//! value for the field, so an ancestor edit never leaves stale copies in
//! descendants.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Viewport-width tiers, in cascade order (root first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Large,
    Medium,
    Small,
}

impl Breakpoint {
    /// All breakpoints, root to leaf.
    pub const ALL: [Breakpoint; 3] = [Breakpoint::Large, Breakpoint::Medium, Breakpoint::Small];

    /// The breakpoint this one inherits from. `None` for the root.
    pub fn parent(self) -> Option<Breakpoint> {
        match self {
            Self::Large => None,
            Self::Medium => Some(Self::Large),
            Self::Small => Some(Self::Medium),
        }
    }

    /// Parse a lowercase breakpoint name. Unknown names yield `None` so
    /// string-boundary callers can no-op.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "large" => Some(Self::Large),
            "medium" => Some(Self::Medium),
            "small" => Some(Self::Small),
            _ => None,
        }
    }

    /// Lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Large => "large",
            Self::Medium => "medium",
            Self::Small => "small",
        }
    }

    /// Media-query minimum width in pixels. `None` for the unwrapped base
    /// tier.
    pub fn min_width(self) -> Option<u32> {
        match self {
            Self::Large => Some(1024),
            Self::Medium => Some(768),
            Self::Small => None,
        }
    }
}

/// Border and outline stroke styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    None,
    Hidden,
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl LineStyle {
    /// CSS keyword for the style.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hidden => "hidden",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
            Self::Double => "double",
        }
    }
}

/// The configurable layout fields, used as keys in the inheritance map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LayoutField {
    Variant,
    Size,
    Gap,
    Margin,
    Padding,
    Visible,
    Animate,
    AnimationDurationMs,
    Radius,
    BorderWidth,
    BorderStyle,
    BorderColor,
    OutlineWidth,
    OutlineStyle,
    OutlineOffset,
    OutlineColor,
}

impl LayoutField {
    /// Every field, in record order.
    pub const ALL: [LayoutField; 16] = [
        LayoutField::Variant,
        LayoutField::Size,
        LayoutField::Gap,
        LayoutField::Margin,
        LayoutField::Padding,
        LayoutField::Visible,
        LayoutField::Animate,
        LayoutField::AnimationDurationMs,
        LayoutField::Radius,
        LayoutField::BorderWidth,
        LayoutField::BorderStyle,
        LayoutField::BorderColor,
        LayoutField::OutlineWidth,
        LayoutField::OutlineStyle,
        LayoutField::OutlineOffset,
        LayoutField::OutlineColor,
    ];
}

/// The plain per-breakpoint field record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutValues {
    pub variant: String,
    pub size: String,
    pub gap: f32,
    pub margin: f32,
    pub padding: f32,
    pub visible: bool,
    pub animate: bool,
    pub animation_duration_ms: u32,
    pub radius: f32,
    pub border_width: f32,
    pub border_style: LineStyle,
    pub border_color: String,
    pub outline_width: f32,
    pub outline_style: LineStyle,
    pub outline_offset: f32,
    pub outline_color: String,
}

impl Default for LayoutValues {
    fn default() -> Self {
        Self {
            variant: "default".to_string(),
            size: "md".to_string(),
            gap: 16.0,
            margin: 0.0,
            padding: 16.0,
            visible: true,
            animate: true,
            animation_duration_ms: 200,
            radius: 8.0,
            border_width: 1.0,
            border_style: LineStyle::Solid,
            border_color: "var(--border)".to_string(),
            outline_width: 2.0,
            outline_style: LineStyle::None,
            outline_offset: 2.0,
            outline_color: "var(--ring)".to_string(),
        }
    }
}

/// A partial edit against one breakpoint; unset fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_duration_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_style: Option<LineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_offset: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline_color: Option<String>,
}

impl LayoutPatch {
    /// A patch carrying every field of a value record, as used by
    /// copy-between-breakpoints.
    pub fn from_values(values: &LayoutValues) -> Self {
        Self {
            variant: Some(values.variant.clone()),
            size: Some(values.size.clone()),
            gap: Some(values.gap),
            margin: Some(values.margin),
            padding: Some(values.padding),
            visible: Some(values.visible),
            animate: Some(values.animate),
            animation_duration_ms: Some(values.animation_duration_ms),
            radius: Some(values.radius),
            border_width: Some(values.border_width),
            border_style: Some(values.border_style),
            border_color: Some(values.border_color.clone()),
            outline_width: Some(values.outline_width),
            outline_style: Some(values.outline_style),
            outline_offset: Some(values.outline_offset),
            outline_color: Some(values.outline_color.clone()),
        }
    }
}

/// One breakpoint's stored values plus the per-field inheritance record.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    pub values: LayoutValues,
    inherited: BTreeMap<LayoutField, bool>,
}

impl LayoutConfig {
    fn new(inherited: bool) -> Self {
        Self {
            values: LayoutValues::default(),
            inherited: LayoutField::ALL
                .iter()
                .map(|field| (*field, inherited))
                .collect(),
        }
    }

    /// Whether the field's current value was copied down rather than set
    /// explicitly at this breakpoint.
    pub fn is_inherited(&self, field: LayoutField) -> bool {
        self.inherited.get(&field).copied().unwrap_or(false)
    }

    fn mark_explicit(&mut self, field: LayoutField) {
        self.inherited.insert(field, false);
    }
}

/// Resolves breakpoint-scoped layout configuration with inheritance.
#[derive(Debug, Clone)]
pub struct CascadeResolver {
    configs: BTreeMap<Breakpoint, LayoutConfig>,
}

impl Default for CascadeResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadeResolver {
    /// The static default tree: root fields explicit, descendants fully
    /// inherited.
    pub fn new() -> Self {
        let configs = Breakpoint::ALL
            .iter()
            .map(|bp| (*bp, LayoutConfig::new(bp.parent().is_some())))
            .collect();
        Self { configs }
    }

    /// Wholesale replacement with the default tree.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// One breakpoint's stored state.
    pub fn config(&self, bp: Breakpoint) -> &LayoutConfig {
        &self.configs[&bp]
    }

    /// Whether a field is inherited at a breakpoint.
    pub fn is_inherited(&self, bp: Breakpoint, field: LayoutField) -> bool {
        self.config(bp).is_inherited(field)
    }

    /// Apply a patch at a breakpoint, marking every patched field explicit
    /// there. Descendants are untouched; their reads resolve through the
    /// ancestor walk.
    pub fn update(&mut self, bp: Breakpoint, patch: &LayoutPatch) {
        let config = self
            .configs
            .get_mut(&bp)
            .expect("every breakpoint has a config");

        macro_rules! apply_if_set {
            ($($field:ident => $variant:ident),+ $(,)?) => {
                $(
                    if let Some(value) = &patch.$field {
                        config.values.$field = value.clone();
                        config.mark_explicit(LayoutField::$variant);
                    }
                )+
            };
        }

        apply_if_set!(
            variant => Variant,
            size => Size,
            gap => Gap,
            margin => Margin,
            padding => Padding,
            visible => Visible,
            animate => Animate,
            animation_duration_ms => AnimationDurationMs,
            radius => Radius,
            border_width => BorderWidth,
            border_style => BorderStyle,
            border_color => BorderColor,
            outline_width => OutlineWidth,
            outline_style => OutlineStyle,
            outline_offset => OutlineOffset,
            outline_color => OutlineColor,
        );
    }

    /// Resolve the effective field record for a breakpoint.
    ///
    /// Inherited fields take the nearest explicit ancestor's value; the
    /// root always reads its own storage.
    pub fn effective(&self, bp: Breakpoint) -> LayoutValues {
        let config = self.config(bp);
        let Some(parent) = bp.parent() else {
            return config.values.clone();
        };

        let mut resolved = self.effective(parent);

        macro_rules! overlay_explicit {
            ($($field:ident => $variant:ident),+ $(,)?) => {
                $(
                    if !config.is_inherited(LayoutField::$variant) {
                        resolved.$field = config.values.$field.clone();
                    }
                )+
            };
        }

        overlay_explicit!(
            variant => Variant,
            size => Size,
            gap => Gap,
            margin => Margin,
            padding => Padding,
            visible => Visible,
            animate => Animate,
            animation_duration_ms => AnimationDurationMs,
            radius => Radius,
            border_width => BorderWidth,
            border_style => BorderStyle,
            border_color => BorderColor,
            outline_width => OutlineWidth,
            outline_style => OutlineStyle,
            outline_offset => OutlineOffset,
            outline_color => OutlineColor,
        );

        resolved
    }

    /// Copy every effective field of `source` onto `target` as one
    /// explicit patch.
    pub fn copy_all(&mut self, source: Breakpoint, target: Breakpoint) {
        let patch = LayoutPatch::from_values(&self.effective(source));
        self.update(target, &patch);
    }
}
