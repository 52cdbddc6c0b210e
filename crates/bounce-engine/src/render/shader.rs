use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};

const BUILTIN_LABEL: &str = "builtin particle.wgsl";

/// Entry points every particle shader must define.
pub const VERTEX_ENTRY: &str = "vs_main";
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL source for the particle pipeline.
///
/// The shader reads `Particle { model: mat4x4<f32>, color: vec4<f32> }` from
/// `@group(0) @binding(0)` and takes the quad position at `@location(0)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ShaderSource {
    label: String,
    code: Cow<'static, str>,
}

impl ShaderSource {
    /// The shader compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            label: BUILTIN_LABEL.to_string(),
            code: Cow::Borrowed(include_str!("shaders/particle.wgsl")),
        }
    }

    /// Wraps in-memory WGSL, checking that both entry points are present.
    pub fn from_wgsl(label: impl Into<String>, code: impl Into<Cow<'static, str>>) -> Result<Self> {
        let label = label.into();
        let code = code.into();
        for entry in [VERTEX_ENTRY, FRAGMENT_ENTRY] {
            anyhow::ensure!(
                code.contains(&format!("fn {entry}")),
                "{label}: missing entry point `{entry}`"
            );
        }
        Ok(Self { label, code })
    }

    /// Reads a WGSL file.
    pub fn load(path: &Path) -> Result<Self> {
        let code = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read shader file {}", path.display()))?;
        Self::from_wgsl(path.display().to_string(), code)
    }

    /// Reads `path` if given, falling back to [`builtin`](Self::builtin).
    ///
    /// Load failures are logged, never returned.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        match Self::load(path) {
            Ok(src) => {
                log::info!("using shader {}", src.label);
                src
            }
            Err(e) => {
                log::warn!("{e:#}; using built-in shader");
                Self::builtin()
            }
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.label == BUILTIN_LABEL
    }
}

impl Default for ShaderSource {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_entry_point_check() {
        let b = ShaderSource::builtin();
        assert!(b.is_builtin());
        assert!(ShaderSource::from_wgsl("copy", b.code().to_string()).is_ok());
    }

    #[test]
    fn missing_entry_point_is_rejected() {
        let err = ShaderSource::from_wgsl("frag-only", "@fragment fn fs_main() {}").unwrap_err();
        assert!(err.to_string().contains("vs_main"), "{err}");
    }

    #[test]
    fn missing_file_falls_back_to_builtin() {
        let path = Path::new("definitely/not/here/particle.wgsl");
        assert!(ShaderSource::load(path).is_err());
        assert_eq!(ShaderSource::load_or_builtin(Some(path)), ShaderSource::builtin());
    }

    #[test]
    fn no_path_is_builtin() {
        assert!(ShaderSource::load_or_builtin(None).is_builtin());
    }

    #[test]
    fn loads_shader_from_disk() {
        let path = std::env::temp_dir().join(format!("bounce-shader-{}.wgsl", std::process::id()));
        std::fs::write(&path, ShaderSource::builtin().code()).unwrap();

        let src = ShaderSource::load(&path).unwrap();
        assert!(!src.is_builtin());
        assert_eq!(src.code(), ShaderSource::builtin().code());

        std::fs::remove_file(&path).unwrap();
    }
}
