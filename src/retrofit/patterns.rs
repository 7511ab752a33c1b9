//! Frozen patterns and replacement templates used by the transformers.
//!
//! Regexes are compiled lazily, once per process. Every pattern is a
//! constant, so compilation failure is a programming error.

use regex::Regex;
use std::sync::OnceLock;

/// Import line added to every game screen.
pub const VIDEO_IMPORT: &str = "import '../../widgets/game_video_widget.dart';";

/// Present once the helper method has been injected.
pub const HELPER_SENTINEL: &str = "_getCurrentVideoType()";

pub const HELPER_METHOD: &str = "
  GameVideoType _getCurrentVideoType() {
    if (_showFeedback) {
      return _isCorrect ? GameVideoType.excelente : GameVideoType.intentalo;
    }
    return GameVideoType.pensando;
  }
";

/// Both must be present for a screen to count as migrated.
pub const WIDGET_SENTINEL: &str = "GameVideoWidget";
pub const SHOW_VIDEO_SENTINEL: &str = "showVideo = screenWidth > 600";

pub const BUILD_LOCALS: &str = "
    final screenWidth = MediaQuery.of(context).size.width;
    final showVideo = screenWidth > 600;
";

pub const GAME_AREA_REPLACEMENT: &str = "// Área de juego
              Expanded(
                child: Row(
                  crossAxisAlignment: CrossAxisAlignment.start,
                  children: [
                    // Video en la izquierda (tablet y desktop)
                    if (showVideo)
                      Container(
                        width: 450,
                        padding: const EdgeInsets.all(20),
                        child: Column(
                          children: [
                            Expanded(
                              child: LayoutBuilder(
                                builder: (context, constraints) {
                                  return GameVideoWidget(
                                    videoType: _getCurrentVideoType(),
                                    width: 400,
                                    height: constraints.maxHeight,
                                  );
                                },
                              ),
                            ),
                          ],
                        ),
                      ),
                    // Contenido del juego
                    Expanded(
                      child: Center(";

pub const LAYOUT_CLOSING: &str = "),
                  ),
                ),
              ],
            ),
          ),
        ],
      ),
    );
  }";

/// An `import ...;` statement terminated by a newline.
pub fn import_line() -> &'static Regex {
    static IMPORT_LINE: OnceLock<Regex> = OnceLock::new();
    IMPORT_LINE.get_or_init(|| Regex::new(r"import [^;]+;\n").expect("valid import regex"))
}

/// Start of the build method at class-member indentation.
pub fn member_build_anchor() -> &'static Regex {
    static MEMBER_BUILD: OnceLock<Regex> = OnceLock::new();
    MEMBER_BUILD.get_or_init(|| {
        Regex::new(r"\n  @override\s+Widget build\(BuildContext context\)")
            .expect("valid build anchor regex")
    })
}

/// A build method whose body starts by returning a `Scaffold`.
///
/// Group `header` spans the signature up to and including the opening brace.
pub fn scaffold_build_entry() -> &'static Regex {
    static SCAFFOLD_ENTRY: OnceLock<Regex> = OnceLock::new();
    SCAFFOLD_ENTRY.get_or_init(|| {
        Regex::new(
            r"(?P<header>@override\s+Widget build\(BuildContext context\)\s*\{)\s*return Scaffold\(",
        )
        .expect("valid scaffold entry regex")
    })
}

/// The commented `Expanded(child: Center(` that holds the game content.
pub fn game_area() -> &'static Regex {
    static GAME_AREA: OnceLock<Regex> = OnceLock::new();
    GAME_AREA.get_or_init(|| {
        Regex::new(r"// Área de juego\s+Expanded\(\s+child:\s+Center\(")
            .expect("valid game area regex")
    })
}

/// Closing parentheses of the layout tree that the game area lives in.
pub fn layout_closing() -> &'static Regex {
    static CLOSING: OnceLock<Regex> = OnceLock::new();
    CLOSING.get_or_init(|| {
        Regex::new(r"\),\s+\),\s+\),\s+\]\s*,\s+\),\s+\),\s+\),\s+\);")
            .expect("valid closing regex")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_line_spans_until_semicolon() {
        let text = "import 'a.dart';\nimport 'b.dart'\n    show B;\nvoid main() {}\n";
        let found: Vec<&str> = import_line().find_iter(text).map(|m| m.as_str()).collect();
        assert_eq!(found, vec!["import 'a.dart';\n", "import 'b.dart'\n    show B;\n"]);
    }

    #[test]
    fn test_import_line_requires_trailing_newline() {
        assert!(import_line().find("import 'a.dart';").is_none());
    }

    #[test]
    fn test_member_build_anchor_needs_member_indent() {
        assert!(member_build_anchor()
            .is_match("}\n\n  @override\n  Widget build(BuildContext context) {"));
        assert!(!member_build_anchor().is_match("\n@override\nWidget build(BuildContext context)"));
    }

    #[test]
    fn test_scaffold_entry_captures_header() {
        let text = "  @override\n  Widget build(BuildContext context) {\n    return Scaffold(";
        let caps = scaffold_build_entry().captures(text).unwrap();
        assert_eq!(
            &caps["header"],
            "@override\n  Widget build(BuildContext context) {"
        );
    }

    #[test]
    fn test_scaffold_entry_rejects_other_bodies() {
        let text = "@override\n  Widget build(BuildContext context) {\n    final x = 1;\n    return Scaffold(";
        assert!(!scaffold_build_entry().is_match(text));
    }

    #[test]
    fn test_game_area_spans_lines() {
        let text = "// Área de juego\n            Expanded(\n              child: Center(\n";
        assert!(game_area().is_match(text));
    }

    #[test]
    fn test_layout_closing() {
        let text = "),\n  ),\n  ),\n ],\n ),\n ),\n ),\n );";
        assert!(layout_closing().is_match(text));
        assert!(!layout_closing().is_match("),\n),\n],\n),\n);"));
    }

    #[test]
    fn test_templates_carry_sentinels() {
        assert!(HELPER_METHOD.contains(HELPER_SENTINEL));
        assert!(GAME_AREA_REPLACEMENT.contains(WIDGET_SENTINEL));
        assert!(BUILD_LOCALS.contains(SHOW_VIDEO_SENTINEL));
        assert!(GAME_AREA_REPLACEMENT.contains("width: 450"));
    }
}
