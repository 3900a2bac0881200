use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::RwLock;

use anyhow::anyhow;
use anyhow::Error;
use async_trait::async_trait;
use lightningcss::declaration::DeclarationBlock;
use lightningcss::printer::PrinterOptions;
use lightningcss::properties::Property;
use lightningcss::properties::PropertyId;
use lightningcss::rules::CssRule;
use lightningcss::rules::CssRuleList;
use lightningcss::stylesheet::ParserOptions;
use lightningcss::stylesheet::StyleSheet;
use lightningcss::vendor_prefix::VendorPrefix;

use stylesort_config::map::PropertyOrderMap;
use stylesort_config::LoadConfigOptions;
use stylesort_config::SortConfig;
use stylesort_config::StylesortRcConfigLoader;
use stylesort_core::plugin::PluginContext;
use stylesort_core::plugin::TransformResult;
use stylesort_core::plugin::TransformerPlugin;
use stylesort_core::types::Asset;
use stylesort_core::types::Code;
use stylesort_core::types::Syntax;

use crate::scss_comments::strip_line_comments;

/// Reorders the declarations of every rule according to the configured
/// property order
#[derive(Debug)]
pub struct StylesortOrderTransformerPlugin {
  config: SortConfig,
  config_files: Vec<PathBuf>,
}

impl StylesortOrderTransformerPlugin {
  pub fn new(ctx: &PluginContext) -> Result<Self, Error> {
    let loader = StylesortRcConfigLoader::new(ctx.config.clone());
    let (config, config_files) = loader.load(LoadConfigOptions::default())?;

    Ok(StylesortOrderTransformerPlugin {
      config,
      config_files,
    })
  }

  /// An asset-level override wins, then the file extension, then the
  /// configured dialect
  fn syntax_for(&self, asset: &Asset) -> Syntax {
    asset
      .syntax
      .or_else(|| {
        asset
          .file_path
          .extension()
          .and_then(|extension| Syntax::from_extension(&extension.to_string_lossy()))
      })
      .unwrap_or(self.config.syntax)
  }
}

#[async_trait]
impl TransformerPlugin for StylesortOrderTransformerPlugin {
  #[tracing::instrument(
    level = "debug",
    skip_all,
    fields(plugin = "StylesortOrderTransformerPlugin")
  )]
  async fn transform(&self, asset: Asset) -> Result<TransformResult, Error> {
    let syntax = self.syntax_for(&asset);

    let code = {
      let code = asset.code.as_str()?;
      let source = match syntax {
        Syntax::Css => Cow::Borrowed(code),
        Syntax::Scss => strip_line_comments(code),
      };

      // Scss sources recover from constructs the parser does not know;
      // plain css parses strictly
      let warnings = matches!(syntax, Syntax::Scss).then(|| Arc::new(RwLock::new(Vec::new())));

      let mut stylesheet = StyleSheet::parse(
        &source,
        ParserOptions {
          filename: asset.file_path.to_string_lossy().into_owned(),
          error_recovery: matches!(syntax, Syntax::Scss),
          warnings: warnings.clone(),
          ..ParserOptions::default()
        },
      )
      .map_err(|error| anyhow!("Failed to parse {}: {error}", asset.file_path.display()))?;

      sort_rules(&mut stylesheet.rules, &self.config.order);

      if let Some(warnings) = &warnings {
        if let Ok(warnings) = warnings.read() {
          for warning in warnings.iter() {
            tracing::warn!("Recovered from {warning} in {}", asset.file_path.display());
          }
        }
      }

      stylesheet
        .to_css(PrinterOptions::default())
        .map_err(|error| anyhow!("Failed to print {}: {error}", asset.file_path.display()))?
        .code
    };

    Ok(TransformResult {
      asset: Asset {
        code: Arc::new(Code::from(code)),
        ..asset
      },
      invalidate_on_file_change: self.config_files.clone(),
    })
  }
}

fn sort_rules(rules: &mut CssRuleList<'_>, order: &PropertyOrderMap) {
  for rule in rules.0.iter_mut() {
    match rule {
      CssRule::Style(style) => {
        sort_declarations(&mut style.declarations, order);
        sort_rules(&mut style.rules, order);
      }
      CssRule::Media(media) => sort_rules(&mut media.rules, order),
      CssRule::Supports(supports) => sort_rules(&mut supports.rules, order),
      CssRule::Container(container) => sort_rules(&mut container.rules, order),
      CssRule::LayerBlock(layer) => sort_rules(&mut layer.rules, order),
      _ => {}
    }
  }
}

fn sort_declarations(declarations: &mut DeclarationBlock<'_>, order: &PropertyOrderMap) {
  // Normal and !important declarations are separate lists; each is sorted
  // on its own and a declaration never moves between them
  sort_properties(&mut declarations.declarations, order);
  sort_properties(&mut declarations.important_declarations, order);
}

fn sort_properties(properties: &mut [Property<'_>], order: &PropertyOrderMap) {
  if properties.len() < 2 {
    return;
  }

  // Stable sort: equal ranks keep their source order
  properties.sort_by(|a, b| {
    let a = a.property_id();
    let b = b.property_id();

    order.compare(&lookup_name(&a), &lookup_name(&b))
  });
}

/// The table lookup key for a property
///
/// Vendor-prefixed properties look up their full prefixed spelling, so a
/// prefixed form only matches a table entry that spells the prefix.
fn lookup_name<'a>(property_id: &'a PropertyId<'_>) -> Cow<'a, str> {
  let prefix = property_id.prefix();

  let prefix = if prefix.contains(VendorPrefix::WebKit) {
    "-webkit-"
  } else if prefix.contains(VendorPrefix::Moz) {
    "-moz-"
  } else if prefix.contains(VendorPrefix::Ms) {
    "-ms-"
  } else if prefix.contains(VendorPrefix::O) {
    "-o-"
  } else {
    return Cow::Borrowed(property_id.name());
  };

  Cow::Owned(format!("{prefix}{}", property_id.name()))
}

#[cfg(test)]
mod tests {
  use std::path::Path;
  use std::path::PathBuf;
  use std::sync::Arc;

  use pretty_assertions::assert_eq;
  use stylesort_core::config_loader::ConfigLoader;
  use stylesort_core::plugin::PluginLogger;
  use stylesort_core::plugin::PluginOptions;
  use stylesort_filesystem::in_memory_file_system::InMemoryFileSystem;

  use super::*;

  async fn run_plugin(
    fs: Arc<InMemoryFileSystem>,
    asset: Asset,
  ) -> anyhow::Result<TransformResult> {
    let project_root = PathBuf::from("/project");
    let plugin = StylesortOrderTransformerPlugin::new(&PluginContext {
      config: Arc::new(ConfigLoader {
        fs: fs.clone(),
        search_path: project_root.join("index"),
        project_root,
      }),
      file_system: fs,
      logger: PluginLogger::default(),
      options: Arc::new(PluginOptions::default()),
    })?;

    plugin.transform(asset).await
  }

  fn asset(file_path: &str, code: &str) -> Asset {
    Asset {
      id: String::from(file_path),
      file_path: PathBuf::from(file_path),
      code: Arc::new(Code::from(code)),
      is_source: true,
      ..Asset::default()
    }
  }

  async fn sort(code: &str) -> String {
    let fs = Arc::new(InMemoryFileSystem::default());
    let result = run_plugin(fs, asset("styles.css", code)).await.unwrap();

    result.asset.code.as_str().unwrap().to_string()
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn sorts_declarations_by_the_default_order() {
    assert_eq!(
      sort(".card {\n  color: red;\n  display: block;\n}\n").await,
      ".card {\n  display: block;\n  color: red;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn unknown_properties_fall_to_the_bottom() {
    assert_eq!(
      sort(".card {\n  foo-custom-prop: 1;\n  top: 0;\n}\n").await,
      ".card {\n  top: 0;\n  foo-custom-prop: 1;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn shorthands_sort_before_their_longhands() {
    assert_eq!(
      sort(".card {\n  border-width: 1px;\n  border: solid;\n}\n").await,
      ".card {\n  border: solid;\n  border-width: 1px;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn preserves_source_order_of_unknown_properties() {
    assert_eq!(
      sort(".card {\n  foo-b: 2;\n  foo-a: 1;\n  display: block;\n}\n").await,
      ".card {\n  display: block;\n  foo-b: 2;\n  foo-a: 1;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn sorts_rules_nested_in_at_rules() {
    assert_eq!(
      sort("@media (min-width: 640px) {\n  .card {\n    color: red;\n    display: block;\n  }\n}\n")
        .await,
      "@media (min-width: 640px) {\n  .card {\n    display: block;\n    color: red;\n  }\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn sorts_important_declarations_independently() {
    assert_eq!(
      sort(".card {\n  color: red !important;\n  display: block !important;\n}\n").await,
      ".card {\n  display: block !important;\n  color: red !important;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn strips_scss_line_comments_before_parsing() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let result = run_plugin(
      fs,
      asset(
        "styles.scss",
        "// header\n.card {\n  color: red; // trailing\n  display: block;\n}\n",
      ),
    )
    .await
    .unwrap();

    assert_eq!(
      result.asset.code.as_str().unwrap(),
      ".card {\n  display: block;\n  color: red;\n}\n"
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn returns_an_error_for_invalid_css() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let result = run_plugin(fs, asset("styles.css", ".card {\n  color red;\n}\n")).await;

    assert!(result.is_err());
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn reports_the_builtin_config_for_invalidation() {
    let fs = Arc::new(InMemoryFileSystem::default());
    let result = run_plugin(fs, asset("styles.css", ".card {\n  top: 0;\n}\n"))
      .await
      .unwrap();

    assert_eq!(
      result.invalidate_on_file_change,
      vec![PathBuf::from("@stylesort/config-default")]
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn honors_a_project_rc_file() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      Path::new("/project/.stylesortrc"),
      String::from(
        r#"{
          "syntax": "css",
          "plugins": {
            "@stylesort/transformer-order": {
              "properties-order": ["color", "display"],
            },
          },
        }"#,
      ),
    );

    let result = run_plugin(
      fs,
      asset("styles.css", ".card {\n  display: block;\n  color: red;\n}\n"),
    )
    .await
    .unwrap();

    assert_eq!(
      result.asset.code.as_str().unwrap(),
      ".card {\n  color: red;\n  display: block;\n}\n"
    );
    assert_eq!(
      result.invalidate_on_file_change,
      vec![PathBuf::from("/project/.stylesortrc")]
    );
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn honors_the_top_unspecified_position() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      Path::new("/project/.stylesortrc"),
      String::from(
        r#"{
          "syntax": "css",
          "plugins": {
            "@stylesort/transformer-order": {
              "properties-order": ["display"],
              "unspecified-properties-position": "top",
            },
          },
        }"#,
      ),
    );

    let result = run_plugin(
      fs,
      asset("styles.css", ".card {\n  display: block;\n  foo-a: 1;\n}\n"),
    )
    .await
    .unwrap();

    assert_eq!(
      result.asset.code.as_str().unwrap(),
      ".card {\n  foo-a: 1;\n  display: block;\n}\n"
    );
  }
}
