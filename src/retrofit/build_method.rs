use std::borrow::Cow;
use tracing::{info, warn};

use super::patterns::{
    game_area, layout_closing, scaffold_build_entry, BUILD_LOCALS, GAME_AREA_REPLACEMENT,
    LAYOUT_CLOSING, SHOW_VIDEO_SENTINEL, WIDGET_SENTINEL,
};
use super::transform::Transformer;

/// Rewrites a screen's `build` method to show the video next to the game.
///
/// Three edits happen in sequence:
/// 1. `screenWidth`/`showVideo` locals are declared at the top of `build`.
/// 2. The `// Área de juego` `Expanded(child: Center(` becomes a `Row` with the
///    video column on the left and the original content on the right.
/// 3. The closing parentheses of the surrounding layout are replaced so the
///    new `Row` is balanced.
///
/// Only `build` methods whose body opens with `return Scaffold(` are touched,
/// and every one of them gets the locals in the same pass. If the game area
/// comment is missing, only the locals are added; a rerun finds no bare
/// `{ return Scaffold(` left and leaves the file alone.
pub struct RewriteBuild;

impl RewriteBuild {
    pub fn is_migrated(source: &str) -> bool {
        source.contains(WIDGET_SENTINEL) && source.contains(SHOW_VIDEO_SENTINEL)
    }
}

impl Transformer for RewriteBuild {
    fn name(&self) -> &'static str {
        "rewrite-build"
    }

    fn apply<'a>(&self, source: &'a str) -> Cow<'a, str> {
        if Self::is_migrated(source) {
            info!("video already integrated");
            return Cow::Borrowed(source);
        }

        let headers: Vec<usize> = scaffold_build_entry()
            .captures_iter(source)
            .filter_map(|caps| caps.name("header").map(|m| m.end()))
            .collect();
        if headers.is_empty() {
            info!("no standard build method found");
            return Cow::Borrowed(source);
        }

        let mut out = String::with_capacity(
            source.len() + headers.len() * BUILD_LOCALS.len() + GAME_AREA_REPLACEMENT.len(),
        );
        let mut copied = 0;
        for at in headers {
            out.push_str(&source[copied..at]);
            out.push_str(BUILD_LOCALS);
            copied = at;
        }
        out.push_str(&source[copied..]);

        let Some(area) = game_area().find(&out).map(|m| m.range()) else {
            info!("game area not found, only screen width locals were added");
            return Cow::Owned(out);
        };
        let tail = area.start + GAME_AREA_REPLACEMENT.len();
        out.replace_range(area, GAME_AREA_REPLACEMENT);

        // The closing that pairs with the new Row always follows the game area.
        match layout_closing().find_at(&out, tail).map(|m| m.range()) {
            Some(closing) => out.replace_range(closing, LAYOUT_CLOSING),
            None => warn!("layout closing not found, rewritten build method is unbalanced"),
        }

        Cow::Owned(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: &str = "  @override
  Widget build(BuildContext context) {
    return Scaffold(
      body: Container(
        child: SafeArea(
          child: Column(
            children: [
              // Área de juego
              Expanded(
                child: Center(
                  child: Padding(
                    padding: const EdgeInsets.all(16),
                    child: Text('7 - 2 = ?'),
                  ),
                ),
              ),
            ],
          ),
        ),
      ),
    );
  }
";

    #[test]
    fn test_full_rewrite() {
        let out = RewriteBuild.apply(SCREEN);
        assert!(out.contains(
            "Widget build(BuildContext context) {\n    final screenWidth = MediaQuery.of(context).size.width;\n    final showVideo = screenWidth > 600;\n\n    return Scaffold("
        ));
        assert!(out.contains("child: Row(\n                  crossAxisAlignment: CrossAxisAlignment.start,"));
        assert!(out.contains("if (showVideo)"));
        assert!(out.contains("videoType: _getCurrentVideoType(),"));
        assert!(out.contains("child: Center(\n                  child: Padding("));
        assert!(out.ends_with(&format!("child: Text('7 - 2 = ?'),\n                  {}\n  }}\n", LAYOUT_CLOSING)));
        assert!(RewriteBuild::is_migrated(&out));
    }

    #[test]
    fn test_idempotent_after_full_rewrite() {
        let once = RewriteBuild.apply(SCREEN).into_owned();
        assert!(matches!(RewriteBuild.apply(&once), Cow::Borrowed(_)));
    }

    #[test]
    fn test_migrated_screen_untouched() {
        let src = "final showVideo = screenWidth > 600;\nGameVideoWidget(videoType: x)";
        assert!(matches!(RewriteBuild.apply(src), Cow::Borrowed(_)));
    }

    #[test]
    fn test_one_sentinel_is_not_enough() {
        let src = SCREEN.replace("Text(", "GameVideoWidget(");
        assert!(matches!(RewriteBuild.apply(&src), Cow::Owned(_)));
    }

    #[test]
    fn test_no_scaffold_entry_is_noop() {
        let src = SCREEN.replace("return Scaffold(", "return Material(");
        assert!(matches!(RewriteBuild.apply(&src), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_game_area_adds_locals_only() {
        let src = SCREEN.replace("// Área de juego", "// Juego");
        let out = RewriteBuild.apply(&src).into_owned();
        assert!(out.contains(SHOW_VIDEO_SENTINEL));
        assert!(!out.contains(WIDGET_SENTINEL));
        assert_eq!(out.replace(BUILD_LOCALS, ""), src);
        assert!(matches!(RewriteBuild.apply(&out), Cow::Borrowed(_)));
    }

    #[test]
    fn test_missing_game_area_with_two_builds() {
        let src = "class FirstScreen extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Scaffold(body: Text('a'));
  }
}

class SecondScreen extends StatelessWidget {
  @override
  Widget build(BuildContext context) {
    return Scaffold(body: Text('b'));
  }
}
";
        let once = RewriteBuild.apply(src).into_owned();
        assert_eq!(once.matches(BUILD_LOCALS).count(), 2);
        assert_eq!(once.replace(BUILD_LOCALS, ""), src);

        let twice = RewriteBuild.apply(&once);
        assert!(matches!(twice, Cow::Borrowed(_)));
        assert_eq!(twice, once);
    }

    #[test]
    fn test_missing_closing_still_rewrites_area() {
        let src = SCREEN.replace("            ],\n", "            ]\n");
        let out = RewriteBuild.apply(&src).into_owned();
        assert!(out.contains(WIDGET_SENTINEL));
        assert!(!out.contains(LAYOUT_CLOSING));
        assert!(matches!(RewriteBuild.apply(&out), Cow::Borrowed(_)));
    }
}
