use std::path::Path;

use forest_night::catalog::{DIAGNOSTIC_PAIRS, WORKBENCH_PAIRS};
use forest_night::options::{
    Configuration, ContrastSetting, Cursor, DiagnosticOpacity, Selection, Workbench,
};
use forest_night::theme::{
    ForestNight, LoadError, PaletteRole, SemanticValue, TABLE_FILES, ThemeSource,
};

fn theme_dir() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/themes/forest-night"))
}

fn read_table(name: &str) -> String {
    std::fs::read_to_string(theme_dir().join(name)).unwrap()
}

fn theme() -> ForestNight {
    ForestNight::embedded().unwrap()
}

#[test]
fn test_embedded_tables_load() {
    assert!(ForestNight::embedded().is_ok());
}

#[test]
fn test_from_dir_matches_embedded() {
    let from_dir = ForestNight::from_dir(theme_dir()).unwrap();
    let config = Configuration::default();
    let palette = from_dir.palette(&config);
    assert_eq!(palette, theme().palette(&config));
    assert_eq!(
        from_dir.ui_colors(&palette, &config),
        theme().ui_colors(&palette, &config)
    );
}

#[test]
fn test_palette_per_contrast() {
    let theme = theme();
    let palette = |contrast| {
        theme.palette(&Configuration {
            contrast,
            ..Default::default()
        })
    };

    assert_eq!(palette(ContrastSetting::Hard).get(PaletteRole::Bg0), "#1e2326");
    assert_eq!(palette(ContrastSetting::Medium).get(PaletteRole::Bg), "#2d353b");
    assert_eq!(palette(ContrastSetting::Soft).get(PaletteRole::Bg5), "#555f66");
    assert_eq!(palette(ContrastSetting::Theme), palette(ContrastSetting::Medium));

    // Foreground roles are shared
    assert_eq!(
        palette(ContrastSetting::Hard).foreground,
        palette(ContrastSetting::Soft).foreground
    );
}

#[test]
fn test_every_palette_role_is_a_color() {
    let palette = theme().palette(&Configuration::default());
    for role in PaletteRole::ALL {
        assert!(
            forest_night::color::parse_color(palette.get(role)).is_some(),
            "{role}"
        );
    }
}

#[test]
fn test_ui_colors_cover_catalog() {
    let theme = theme();
    for workbench in Workbench::ALL {
        for high_contrast in [false, true] {
            let config = Configuration {
                workbench,
                high_contrast,
                ..Default::default()
            };
            let ui = theme.ui_colors(&theme.palette(&config), &config);
            for pair in WORKBENCH_PAIRS.iter().chain(DIAGNOSTIC_PAIRS) {
                assert!(ui.contains_key(pair.foreground), "{}", pair.foreground);
                assert!(ui.contains_key(pair.background), "{}", pair.background);
                if let Some(base) = pair.base {
                    assert!(ui.contains_key(base), "{base}");
                }
            }
        }
    }
}

#[test]
fn test_ui_editor_background_follows_contrast() {
    let theme = theme();
    let config = Configuration {
        contrast: ContrastSetting::Soft,
        ..Default::default()
    };
    let ui = theme.ui_colors(&theme.palette(&config), &config);
    assert_eq!(ui["editor.background"], "#333c43");
}

#[test]
fn test_ui_selection_and_cursor_templates() {
    let theme = theme();

    let grey = Configuration::default();
    let ui = theme.ui_colors(&theme.palette(&grey), &grey);
    assert_eq!(ui["selection.background"], "#475258e0");
    assert_eq!(ui["editorCursor.foreground"], "#d3c6aa");

    let accent = Configuration {
        selection: Selection::Blue,
        cursor: Cursor::Orange,
        ..Default::default()
    };
    let ui = theme.ui_colors(&theme.palette(&accent), &accent);
    assert_eq!(ui["selection.background"], "#3a515d60");
    assert_eq!(ui["editorCursor.foreground"], "#e69875");
}

#[test]
fn test_ui_diagnostic_alpha() {
    let theme = theme();
    let config = Configuration {
        diagnostic_text_background_opacity: DiagnosticOpacity::Half,
        ..Default::default()
    };
    let ui = theme.ui_colors(&theme.palette(&config), &config);
    assert_eq!(ui["editorError.background"], "#543a4880");
}

#[test]
fn test_syntax_italic_keywords_toggle() {
    let theme = theme();
    let palette = theme.palette(&Configuration::default());

    let upright = theme.syntax_rules(&palette, &Configuration::default());
    let italic = theme.syntax_rules(
        &palette,
        &Configuration {
            italic_keywords: true,
            ..Default::default()
        },
    );

    assert_eq!(italic.len(), upright.len() + 3);
    assert!(!upright.iter().any(|r| r.name == "Keyword Italic"));
    let keyword_italic = italic.iter().find(|r| r.name == "Keyword Italic").unwrap();
    assert_eq!(keyword_italic.settings.font_style.as_deref(), Some("italic"));
    assert!(keyword_italic.settings.foreground.is_none());
}

#[test]
fn test_syntax_italic_comments_toggle() {
    let theme = theme();
    let palette = theme.palette(&Configuration::default());
    let comment = |italic_comments| {
        let config = Configuration {
            italic_comments,
            ..Default::default()
        };
        theme
            .syntax_rules(&palette, &config)
            .into_iter()
            .find(|r| r.name == "Comment")
            .unwrap()
    };

    assert_eq!(comment(true).settings.font_style.as_deref(), Some("italic"));
    assert_eq!(comment(false).settings.font_style, None);
    assert_eq!(comment(true).settings.foreground.as_deref(), Some("#a0aca2"));
}

#[test]
fn test_syntax_rule_count() {
    let theme = theme();
    let config = Configuration::default();
    let rules = theme.syntax_rules(&theme.palette(&config), &config);
    assert_eq!(rules.len(), 276);
    assert_eq!(
        rules.iter().filter(|r| r.settings.foreground.is_some()).count(),
        273
    );
}

#[test]
fn test_semantic_rules() {
    let theme = theme();
    let rules = theme.semantic_rules(&theme.palette(&Configuration::default()));
    assert_eq!(rules.len(), 27);
    assert_eq!(rules[0].name, "operatorOverload");
    assert_eq!(rules[0].value, SemanticValue::Color("#e69875".into()));

    let mutable = rules.iter().find(|r| r.name == "*.mutable:rust").unwrap();
    assert!(mutable.value.color().is_none());
}

#[test]
fn test_from_dir_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = ForestNight::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
    assert!(err.to_string().contains(TABLE_FILES[0]));
}

#[test]
fn test_unknown_placeholder_fails_load() {
    let workbench = read_table("workbench.toml").replace("\"{grey2}\"", "\"{grey9}\"");
    let err = ForestNight::from_tables(
        &read_table("palette.toml"),
        &workbench,
        &read_table("syntax.toml"),
        &read_table("semantic.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::Template { .. }));
    assert!(err.to_string().contains("grey9"));
}

#[test]
fn test_missing_contrast_level_fails_load() {
    let palette = read_table("palette.toml").replace("[background.soft]", "[background.extra]");
    let err = ForestNight::from_tables(
        &palette,
        &read_table("workbench.toml"),
        &read_table("syntax.toml"),
        &read_table("semantic.toml"),
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::Parse { table: "palette.toml", .. }));
}

#[test]
fn test_semantic_token_needs_one_value() {
    let semantic = "[[tokens]]\nname = \"x\"\n";
    let err = ForestNight::from_tables(
        &read_table("palette.toml"),
        &read_table("workbench.toml"),
        &read_table("syntax.toml"),
        semantic,
    )
    .unwrap_err();
    assert!(matches!(err, LoadError::Invalid { .. }));
}
