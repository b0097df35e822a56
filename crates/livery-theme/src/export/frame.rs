//! Media-query-scoped export of resolved border, outline, and radius
//! configuration.

use std::collections::{BTreeMap, BTreeSet};

use crate::cascade::{Breakpoint, CascadeResolver, LayoutValues, LineStyle};

/// The exportable property groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PropertyGroup {
    Radius,
    BorderWidth,
    BorderStyle,
    BorderColor,
    OutlineWidth,
    OutlineStyle,
    OutlineOffset,
    OutlineColor,
}

impl PropertyGroup {
    /// Every group.
    pub const ALL: [PropertyGroup; 8] = [
        PropertyGroup::Radius,
        PropertyGroup::BorderWidth,
        PropertyGroup::BorderStyle,
        PropertyGroup::BorderColor,
        PropertyGroup::OutlineWidth,
        PropertyGroup::OutlineStyle,
        PropertyGroup::OutlineOffset,
        PropertyGroup::OutlineColor,
    ];
}

/// Output shape: namespaced custom properties, or real declarations under
/// a configurable selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFlavor {
    #[default]
    CustomProperties,
    UtilityClasses,
}

/// What to include in a frame export.
///
/// Breakpoints and property groups are independent toggles; groups can
/// additionally be overridden per breakpoint.
#[derive(Debug, Clone)]
pub struct CssExportOptions {
    pub breakpoints: BTreeSet<Breakpoint>,
    pub groups: BTreeSet<PropertyGroup>,
    pub group_overrides: BTreeMap<Breakpoint, BTreeSet<PropertyGroup>>,
    pub flavor: ExportFlavor,
    /// Selector for the utility-class flavor.
    pub selector: String,
}

impl Default for CssExportOptions {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoint::ALL.into_iter().collect(),
            groups: PropertyGroup::ALL.into_iter().collect(),
            group_overrides: BTreeMap::new(),
            flavor: ExportFlavor::default(),
            selector: ".frame".to_string(),
        }
    }
}

/// Serialize the resolver's current effective state per the options.
///
/// Pure serialization: unchanged input yields byte-identical text. Small
/// emits the bare base block; medium and large wrap theirs in min-width
/// media queries. Empty inclusion sets still yield valid (possibly empty)
/// text.
pub fn export_frame_css(resolver: &CascadeResolver, options: &CssExportOptions) -> String {
    let mut output = String::new();

    // Mobile-first order: base tier first, then ascending min-widths.
    for bp in [Breakpoint::Small, Breakpoint::Medium, Breakpoint::Large] {
        if !options.breakpoints.contains(&bp) {
            continue;
        }
        let groups = options.group_overrides.get(&bp).unwrap_or(&options.groups);
        let values = resolver.effective(bp);
        let block = render_block(&values, groups, options);

        if !output.is_empty() {
            output.push('\n');
        }
        match bp.min_width() {
            None => output.push_str(&block),
            Some(width) => {
                output.push_str(&format!("@media (min-width: {width}px) {{\n"));
                for line in block.lines() {
                    output.push_str("  ");
                    output.push_str(line);
                    output.push('\n');
                }
                output.push_str("}\n");
            }
        }
    }

    output
}

fn render_block(
    values: &LayoutValues,
    groups: &BTreeSet<PropertyGroup>,
    options: &CssExportOptions,
) -> String {
    let selector = match options.flavor {
        ExportFlavor::CustomProperties => ":root",
        ExportFlavor::UtilityClasses => options.selector.as_str(),
    };

    let mut declarations = String::new();

    if groups.contains(&PropertyGroup::Radius) {
        push_declaration(
            &mut declarations,
            options.flavor,
            "radius",
            "border-radius",
            &format_length(values.radius),
        );
    }

    render_stroke(
        &mut declarations,
        options.flavor,
        groups,
        &StrokeSide {
            prefix: "border",
            width: values.border_width,
            style: values.border_style,
            color_var: "var(--border)",
            offset: None,
            width_group: PropertyGroup::BorderWidth,
            style_group: PropertyGroup::BorderStyle,
            color_group: PropertyGroup::BorderColor,
            offset_group: None,
        },
    );

    render_stroke(
        &mut declarations,
        options.flavor,
        groups,
        &StrokeSide {
            prefix: "outline",
            width: values.outline_width,
            style: values.outline_style,
            color_var: "var(--ring)",
            offset: Some(values.outline_offset),
            width_group: PropertyGroup::OutlineWidth,
            style_group: PropertyGroup::OutlineStyle,
            color_group: PropertyGroup::OutlineColor,
            offset_group: Some(PropertyGroup::OutlineOffset),
        },
    );

    format!("{selector} {{\n{declarations}}}\n")
}

struct StrokeSide {
    prefix: &'static str,
    width: f32,
    style: LineStyle,
    color_var: &'static str,
    offset: Option<f32>,
    width_group: PropertyGroup,
    style_group: PropertyGroup,
    color_group: PropertyGroup,
    offset_group: Option<PropertyGroup>,
}

/// Render one border/outline side, applying the shared special cases:
/// `none` or zero width collapses to a bare `none`; `hidden` keeps the
/// box's footprint by painting a transparent solid stroke (outlines also
/// get their offset injected so the footprint matches the visible case).
fn render_stroke(
    declarations: &mut String,
    flavor: ExportFlavor,
    groups: &BTreeSet<PropertyGroup>,
    side: &StrokeSide,
) {
    let any_included = groups.contains(&side.width_group)
        || groups.contains(&side.style_group)
        || groups.contains(&side.color_group)
        || side
            .offset_group
            .is_some_and(|group| groups.contains(&group));
    if !any_included {
        return;
    }

    if side.style == LineStyle::None || side.width == 0.0 {
        match flavor {
            ExportFlavor::CustomProperties => push_declaration(
                declarations,
                flavor,
                &format!("{}-style", side.prefix),
                "",
                "none",
            ),
            ExportFlavor::UtilityClasses => {
                declarations.push_str(&format!("  {}: none;\n", side.prefix));
            }
        }
        return;
    }

    let hidden = side.style == LineStyle::Hidden;
    let (style_css, color_css) = if hidden {
        ("solid", "transparent")
    } else {
        (side.style.as_css(), side.color_var)
    };

    if groups.contains(&side.width_group) {
        push_declaration(
            declarations,
            flavor,
            &format!("{}-width", side.prefix),
            &format!("{}-width", side.prefix),
            &format_length(side.width),
        );
    }
    if groups.contains(&side.style_group) {
        push_declaration(
            declarations,
            flavor,
            &format!("{}-style", side.prefix),
            &format!("{}-style", side.prefix),
            style_css,
        );
    }
    if groups.contains(&side.color_group) || hidden {
        push_declaration(
            declarations,
            flavor,
            &format!("{}-color", side.prefix),
            &format!("{}-color", side.prefix),
            color_css,
        );
    }
    if let (Some(offset), Some(offset_group)) = (side.offset, side.offset_group) {
        // Hidden strokes always carry their offset so spacing is preserved.
        if groups.contains(&offset_group) || hidden {
            push_declaration(
                declarations,
                flavor,
                &format!("{}-offset", side.prefix),
                &format!("{}-offset", side.prefix),
                &format_length(offset),
            );
        }
    }
}

fn push_declaration(
    declarations: &mut String,
    flavor: ExportFlavor,
    var_name: &str,
    css_property: &str,
    value: &str,
) {
    match flavor {
        ExportFlavor::CustomProperties => {
            declarations.push_str(&format!("  --frame-{var_name}: {value};\n"));
        }
        ExportFlavor::UtilityClasses => {
            declarations.push_str(&format!("  {css_property}: {value};\n"));
        }
    }
}

fn format_length(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{value}px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::LayoutPatch;

    fn utility_options() -> CssExportOptions {
        CssExportOptions {
            flavor: ExportFlavor::UtilityClasses,
            ..Default::default()
        }
    }

    #[test]
    fn small_is_bare_and_larger_tiers_are_wrapped() {
        let resolver = CascadeResolver::new();
        let css = export_frame_css(&resolver, &CssExportOptions::default());

        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("@media (min-width: 768px) {"));
        assert!(css.contains("@media (min-width: 1024px) {"));
    }

    #[test]
    fn export_is_byte_identical_for_unchanged_state() {
        let mut resolver = CascadeResolver::new();
        resolver.update(
            Breakpoint::Medium,
            &LayoutPatch {
                radius: Some(4.0),
                ..Default::default()
            },
        );
        let options = CssExportOptions::default();
        assert_eq!(
            export_frame_css(&resolver, &options),
            export_frame_css(&resolver, &options)
        );
    }

    #[test]
    fn breakpoint_toggle_limits_output() {
        let resolver = CascadeResolver::new();
        let options = CssExportOptions {
            breakpoints: [Breakpoint::Medium].into_iter().collect(),
            ..Default::default()
        };
        let css = export_frame_css(&resolver, &options);
        assert!(css.starts_with("@media (min-width: 768px) {"));
        assert!(!css.contains("1024px"));
    }

    #[test]
    fn empty_inclusion_still_yields_valid_text() {
        let resolver = CascadeResolver::new();

        let no_breakpoints = CssExportOptions {
            breakpoints: BTreeSet::new(),
            ..Default::default()
        };
        assert_eq!(export_frame_css(&resolver, &no_breakpoints), "");

        let no_groups = CssExportOptions {
            groups: BTreeSet::new(),
            breakpoints: [Breakpoint::Small].into_iter().collect(),
            ..Default::default()
        };
        assert_eq!(export_frame_css(&resolver, &no_groups), ":root {\n}\n");
    }

    #[test]
    fn per_breakpoint_group_override() {
        let resolver = CascadeResolver::new();
        let mut options = CssExportOptions {
            breakpoints: [Breakpoint::Small, Breakpoint::Medium].into_iter().collect(),
            groups: [PropertyGroup::Radius].into_iter().collect(),
            ..Default::default()
        };
        options
            .group_overrides
            .insert(Breakpoint::Medium, [PropertyGroup::BorderWidth].into_iter().collect());

        let css = export_frame_css(&resolver, &options);
        assert!(css.contains("--frame-radius"));
        assert!(css.contains("--frame-border-width"));
        // The override replaced the global set for medium.
        let media_block = css.split("@media").nth(1).unwrap();
        assert!(!media_block.contains("--frame-radius"));
    }

    #[test]
    fn hidden_outline_exports_transparent_with_offset() {
        let mut resolver = CascadeResolver::new();
        resolver.update(
            Breakpoint::Large,
            &LayoutPatch {
                outline_style: Some(LineStyle::Hidden),
                outline_width: Some(2.0),
                ..Default::default()
            },
        );
        let options = CssExportOptions {
            breakpoints: [Breakpoint::Large].into_iter().collect(),
            groups: [
                PropertyGroup::OutlineWidth,
                PropertyGroup::OutlineStyle,
                PropertyGroup::OutlineColor,
            ]
            .into_iter()
            .collect(),
            flavor: ExportFlavor::UtilityClasses,
            ..Default::default()
        };

        let css = export_frame_css(&resolver, &options);
        assert!(css.contains("outline-color: transparent;"));
        assert!(css.contains("outline-style: solid;"));
        // Offset is injected even though its group is not included.
        assert!(css.contains("outline-offset: 2px;"));
        assert!(!css.contains("var(--ring)"));
    }

    #[test]
    fn none_style_collapses_to_bare_none() {
        let mut resolver = CascadeResolver::new();
        resolver.update(
            Breakpoint::Large,
            &LayoutPatch {
                border_style: Some(LineStyle::None),
                ..Default::default()
            },
        );
        let options = CssExportOptions {
            breakpoints: [Breakpoint::Large].into_iter().collect(),
            ..utility_options()
        };

        let css = export_frame_css(&resolver, &options);
        assert!(css.contains("border: none;"));
        assert!(!css.contains("border-width"));
    }

    #[test]
    fn zero_width_collapses_like_none() {
        let mut resolver = CascadeResolver::new();
        resolver.update(
            Breakpoint::Large,
            &LayoutPatch {
                border_width: Some(0.0),
                ..Default::default()
            },
        );
        let options = CssExportOptions {
            breakpoints: [Breakpoint::Large].into_iter().collect(),
            ..Default::default()
        };

        let css = export_frame_css(&resolver, &options);
        assert!(css.contains("--frame-border-style: none;"));
        assert!(!css.contains("--frame-border-width"));
    }

    #[test]
    fn custom_properties_reference_theme_variables() {
        let resolver = CascadeResolver::new();
        let options = CssExportOptions {
            breakpoints: [Breakpoint::Small].into_iter().collect(),
            ..Default::default()
        };
        let css = export_frame_css(&resolver, &options);
        assert!(css.contains("--frame-border-color: var(--border);"));
    }
}
