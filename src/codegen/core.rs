use blake3::Hash;

use crate::config::{Breakpoint, GridConfig, MAX_TRACKS};
use crate::registry::Area;

use super::gap::gap_classes;

/// Shown by presentation layers in place of the markup when no area exists.
pub const EMPTY_PLACEHOLDER: &str = "<!--- Create some grid areas to generate Tailwind CSS --->";

/// First line of every generated stylesheet.
pub const STYLESHEET_HEADER: &str = "/* CSS Styles for Grid Areas */";

/// Markup dialect of the generated skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MarkupFlavor {
    #[default]
    Html,
    Jsx,
}

impl MarkupFlavor {
    fn class_attr(self) -> &'static str {
        match self {
            Self::Html => "class",
            Self::Jsx => "className",
        }
    }

    fn comment(self, text: &str) -> String {
        match self {
            Self::Html => format!("<!-- {text} -->"),
            Self::Jsx => format!("{{/* {text} */}}"),
        }
    }
}

/// The two generated text artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LayoutCode {
    pub markup: String,
    pub stylesheet: String,
}

impl LayoutCode {
    /// Result for an empty area set: no markup and no rules.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.markup.is_empty() && self.stylesheet.is_empty()
    }

    /// Markup, or the placeholder prompt when nothing has been drawn yet.
    pub fn markup_or_placeholder(&self) -> &str {
        if self.markup.is_empty() {
            EMPTY_PLACEHOLDER
        } else {
            &self.markup
        }
    }

    /// Content hash over both artifacts.
    pub fn fingerprint(&self) -> Hash {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.markup.as_bytes());
        hasher.update(&[0]);
        hasher.update(self.stylesheet.as_bytes());
        hasher.finalize()
    }
}

/// `grid-cols-N` token. The utility vocabulary stops at twelve columns, so
/// larger counts are capped rather than producing a class that does not exist.
pub fn column_token(columns: u16) -> String {
    format!("grid-cols-{}", columns.min(MAX_TRACKS))
}

/// Container class tokens in emission order.
pub fn container_classes(config: &GridConfig) -> Vec<String> {
    let mut classes = vec!["grid".to_string()];
    let columns = column_token(config.columns());

    if config.responsive() {
        classes.push(column_token(1));
        classes.extend(
            config
                .active_breakpoints()
                .into_iter()
                .map(|bp| prefixed(bp, &columns)),
        );
    } else {
        classes.push(columns);
    }

    classes.extend(gap_classes(config));
    classes
}

/// `@apply` rule for one area. Only the column axis varies by breakpoint.
pub fn area_rule(config: &GridConfig, area: &Area) -> String {
    let bounds = area.bounds;
    let breakpoints = config.active_breakpoints();

    let mut tokens = column_axis_tokens(config, &breakpoints, "col-span", bounds.width());
    tokens.push(format!("row-span-{}", bounds.height()));
    tokens.extend(column_axis_tokens(
        config,
        &breakpoints,
        "col-start",
        bounds.start_col + 1,
    ));
    tokens.push(format!("row-start-{}", bounds.start_row + 1));

    format!(".{} {{ @apply {}; }}", area.name, tokens.join(" "))
}

fn column_axis_tokens(
    config: &GridConfig,
    breakpoints: &[Breakpoint],
    utility: &str,
    value: u16,
) -> Vec<String> {
    if !config.responsive() {
        return vec![format!("{utility}-{value}")];
    }

    let token = format!("{utility}-{value}");
    std::iter::once(format!("{utility}-1"))
        .chain(breakpoints.iter().map(|bp| prefixed(*bp, &token)))
        .collect()
}

fn prefixed(breakpoint: Breakpoint, token: &str) -> String {
    format!("{}:{}", breakpoint.prefix(), token)
}

/// Generate HTML markup and stylesheet rules.
pub fn generate(config: &GridConfig, areas: &[Area]) -> LayoutCode {
    generate_with(config, areas, MarkupFlavor::Html)
}

/// Generate with an explicit markup flavour. Areas are emitted in ascending id
/// order regardless of slice order.
pub fn generate_with(config: &GridConfig, areas: &[Area], flavor: MarkupFlavor) -> LayoutCode {
    if areas.is_empty() {
        return LayoutCode::empty();
    }

    let mut ordered: Vec<&Area> = areas.iter().collect();
    ordered.sort_by_key(|area| area.id);

    let attr = flavor.class_attr();
    let mut markup = format!(
        "<div {attr}=\"{}\">\n",
        container_classes(config).join(" ")
    );
    for area in &ordered {
        let comment = flavor.comment(&format!("Content for {}", area.name));
        markup.push_str(&format!(
            "  <div {attr}=\"{}\">{comment}</div>\n",
            area.name
        ));
    }
    markup.push_str("</div>\n");

    let mut stylesheet = String::from(STYLESHEET_HEADER);
    stylesheet.push('\n');
    for area in &ordered {
        stylesheet.push_str(&area_rule(config, area));
        stylesheet.push('\n');
    }

    LayoutCode { markup, stylesheet }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Axis;
    use crate::geometry::Bounds;
    use crate::registry::{AreaRegistry, Placement};

    fn fixed_config() -> GridConfig {
        let mut config = GridConfig::default();
        config.set_responsive(false);
        config
    }

    fn areas(config: &GridConfig, bounds: &[Bounds]) -> Vec<Area> {
        let mut registry = AreaRegistry::new(config.rows(), config.columns());
        for b in bounds {
            assert!(matches!(
                registry.add_if_non_overlapping(*b),
                Placement::Created(_)
            ));
        }
        registry.snapshot()
    }

    #[test]
    fn column_token_caps_at_twelve() {
        assert_eq!(column_token(6), "grid-cols-6");
        assert_eq!(column_token(12), "grid-cols-12");
        assert_eq!(column_token(16), "grid-cols-12");
    }

    #[test]
    fn empty_area_set_yields_empty_output() {
        let code = generate(&GridConfig::default(), &[]);
        assert!(code.is_empty());
        assert_eq!(code, LayoutCode::empty());
        assert_eq!(code.markup_or_placeholder(), EMPTY_PLACEHOLDER);
    }

    #[test]
    fn non_responsive_container_and_rule() {
        let config = fixed_config();
        let areas = areas(&config, &[Bounds::new(0, 1, 0, 1)]);
        assert_eq!(container_classes(&config), vec!["grid", "grid-cols-8"]);
        assert_eq!(
            area_rule(&config, &areas[0]),
            ".div1 { @apply col-span-2 row-span-2 col-start-1 row-start-1; }"
        );
    }

    #[test]
    fn responsive_container_skips_disabled_breakpoints() {
        let mut config = GridConfig::new(8, 6);
        config.set_breakpoint(Breakpoint::Md, false);
        config.set_breakpoint(Breakpoint::Xl, false);
        assert_eq!(
            container_classes(&config),
            vec!["grid", "grid-cols-1", "sm:grid-cols-6", "lg:grid-cols-6"]
        );
    }

    #[test]
    fn responsive_rule_varies_only_column_axis() {
        let mut config = GridConfig::new(8, 6);
        config.set_breakpoint(Breakpoint::Md, false);
        config.set_breakpoint(Breakpoint::Xl, false);
        let areas = areas(&config, &[Bounds::new(2, 4, 1, 3)]);
        assert_eq!(
            area_rule(&config, &areas[0]),
            ".div1 { @apply col-span-1 sm:col-span-3 lg:col-span-3 row-span-3 \
             col-start-1 sm:col-start-2 lg:col-start-2 row-start-3; }"
        );
    }

    #[test]
    fn responsive_with_no_breakpoints_keeps_base_tokens() {
        let mut config = GridConfig::default();
        config.set_breakpoints(crate::config::Breakpoints::none());
        let areas = areas(&config, &[Bounds::new(0, 0, 3, 4)]);
        assert_eq!(container_classes(&config), vec!["grid", "grid-cols-1"]);
        assert_eq!(
            area_rule(&config, &areas[0]),
            ".div1 { @apply col-span-1 row-span-1 col-start-1 row-start-1; }"
        );
    }

    #[test]
    fn gap_tokens_follow_column_tokens() {
        let mut config = fixed_config();
        config.set_gap(Axis::Column, 5);
        config.set_gap(Axis::Row, 5);
        assert_eq!(
            container_classes(&config),
            vec!["grid", "grid-cols-8", "gap-1.5"]
        );
    }

    #[test]
    fn html_markup_lists_areas_in_id_order() {
        let config = fixed_config();
        let mut areas = areas(
            &config,
            &[Bounds::new(0, 0, 0, 7), Bounds::new(1, 7, 0, 1)],
        );
        areas.reverse();
        let code = generate(&config, &areas);
        assert_eq!(
            code.markup,
            "<div class=\"grid grid-cols-8\">\n\
             \x20 <div class=\"div1\"><!-- Content for div1 --></div>\n\
             \x20 <div class=\"div2\"><!-- Content for div2 --></div>\n\
             </div>\n"
        );
        assert_eq!(
            code.stylesheet,
            "/* CSS Styles for Grid Areas */\n\
             .div1 { @apply col-span-8 row-span-1 col-start-1 row-start-1; }\n\
             .div2 { @apply col-span-2 row-span-7 col-start-1 row-start-2; }\n"
        );
    }

    #[test]
    fn jsx_markup_uses_class_name_and_brace_comments() {
        let config = fixed_config();
        let areas = areas(&config, &[Bounds::new(0, 0, 0, 0)]);
        let code = generate_with(&config, &areas, MarkupFlavor::Jsx);
        assert!(code.markup.starts_with("<div className=\"grid grid-cols-8\">"));
        assert!(
            code.markup
                .contains("<div className=\"div1\">{/* Content for div1 */}</div>")
        );
        assert_eq!(code.stylesheet, generate(&config, &areas).stylesheet);
    }

    #[test]
    fn generation_is_idempotent() {
        let config = GridConfig::default();
        let areas = areas(&config, &[Bounds::new(0, 2, 0, 2), Bounds::new(5, 7, 5, 7)]);
        let first = generate(&config, &areas);
        let second = generate(&config, &areas);
        assert_eq!(first, second);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn fingerprint_tracks_content() {
        let config = fixed_config();
        let one = generate(&config, &areas(&config, &[Bounds::new(0, 0, 0, 0)]));
        let two = generate(&config, &areas(&config, &[Bounds::new(0, 1, 0, 0)]));
        assert_ne!(one.fingerprint(), two.fingerprint());
    }
}
