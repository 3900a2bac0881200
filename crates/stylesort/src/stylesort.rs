use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use stylesort_core::config_loader::ConfigLoader;
use stylesort_core::plugin::PluginContext;
use stylesort_core::plugin::PluginLogger;
use stylesort_core::plugin::PluginOptions;
use stylesort_core::plugin::TransformerPlugin;
use stylesort_core::types::Asset;
use stylesort_core::types::Code;
use stylesort_core::types::LogLevel;
use stylesort_core::types::Syntax;
use stylesort_filesystem::os_file_system::OsFileSystem;
use stylesort_filesystem::FileSystemRef;
use stylesort_plugin_transformer_order::StylesortOrderTransformerPlugin;

#[derive(Default)]
pub struct StylesortOptions {
  /// Overrides the file system; defaults to the OS file system
  pub fs: Option<FileSystemRef>,
  pub log_level: LogLevel,
  /// Defaults to the current working directory when empty
  pub project_root: PathBuf,
}

/// The sorting engine
///
/// Construction loads and validates the project configuration once; the
/// resulting ordering table is immutable for the lifetime of the engine.
pub struct Stylesort {
  fs: FileSystemRef,
  plugin: StylesortOrderTransformerPlugin,
}

impl Stylesort {
  pub fn new(options: StylesortOptions) -> Result<Self, Error> {
    let fs = options
      .fs
      .unwrap_or_else(|| Arc::new(OsFileSystem::default()));

    let project_root = if options.project_root.as_os_str().is_empty() {
      fs.cwd()?
    } else {
      options.project_root
    };

    let ctx = PluginContext {
      config: Arc::new(ConfigLoader {
        fs: fs.clone(),
        search_path: project_root.join("index"),
        project_root: project_root.clone(),
      }),
      file_system: fs.clone(),
      logger: PluginLogger::default(),
      options: Arc::new(PluginOptions {
        log_level: options.log_level,
        project_root,
      }),
    };

    let plugin = StylesortOrderTransformerPlugin::new(&ctx)?;

    Ok(Stylesort { fs, plugin })
  }

  /// Sorts the declarations of every rule in the file at `path`
  pub async fn sort_file(&self, path: &Path) -> Result<String, Error> {
    let code = self.fs.read_to_string(path)?;

    let asset = Asset {
      id: path.display().to_string(),
      file_path: path.to_path_buf(),
      code: Arc::new(Code::from(code)),
      syntax: None,
      is_source: true,
    };

    let result = self.plugin.transform(asset).await?;

    Ok(result.asset.code.as_str()?.to_string())
  }

  /// Sorts an in-memory stylesheet in the given dialect
  pub async fn sort_code(&self, code: &str, syntax: Syntax) -> Result<String, Error> {
    let asset = Asset {
      id: String::from("inline"),
      file_path: PathBuf::from("inline"),
      code: Arc::new(Code::from(code)),
      syntax: Some(syntax),
      is_source: true,
    };

    let result = self.plugin.transform(asset).await?;

    Ok(result.asset.code.as_str()?.to_string())
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;
  use stylesort_filesystem::in_memory_file_system::InMemoryFileSystem;

  use super::*;

  fn engine(fs: Arc<InMemoryFileSystem>) -> Stylesort {
    Stylesort::new(StylesortOptions {
      fs: Some(fs),
      project_root: PathBuf::from("/project"),
      ..StylesortOptions::default()
    })
    .unwrap()
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn sorts_a_file_with_the_default_config() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      Path::new("/project/styles.scss"),
      String::from("// header\n.card {\n  color: red;\n  display: block;\n}\n"),
    );

    let output = engine(fs)
      .sort_file(Path::new("/project/styles.scss"))
      .await
      .unwrap();

    assert_eq!(output, ".card {\n  display: block;\n  color: red;\n}\n");
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn sorts_inline_code() {
    let fs = Arc::new(InMemoryFileSystem::default());

    let output = engine(fs)
      .sort_code(".card {\n  top: 0;\n  position: absolute;\n}\n", Syntax::Css)
      .await
      .unwrap();

    assert_eq!(output, ".card {\n  position: absolute;\n  top: 0;\n}\n");
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn honors_the_project_config() {
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
    fs.write_file(
      Path::new("/project/styles.css"),
      String::from(".card {\n  display: block;\n  color: red;\n}\n"),
    );

    let output = engine(fs)
      .sort_file(Path::new("/project/styles.css"))
      .await
      .unwrap();

    assert_eq!(output, ".card {\n  color: red;\n  display: block;\n}\n");
  }

  #[tokio::test(flavor = "multi_thread")]
  async fn surfaces_config_errors_at_construction() {
    let fs = Arc::new(InMemoryFileSystem::default());
    fs.write_file(
      Path::new("/project/.stylesortrc"),
      String::from(r#"{ "syntax": "less", "plugins": {} }"#),
    );

    let error = Stylesort::new(StylesortOptions {
      fs: Some(fs),
      project_root: PathBuf::from("/project"),
      ..StylesortOptions::default()
    })
    .map_err(|err| err.to_string())
    .err()
    .unwrap();

    assert_eq!(error, "Invalid syntax in /project/.stylesortrc");
  }
}
