use super::Value;
use serde::Serialize;

/// The computed configuration for one form field.
///
/// A `NodeConfig` has no identity beyond its owning node: it is recreated on
/// every recompute and never mutated in place. `when` controls visibility;
/// the remaining payload (bounds, default, options, presets) is carried as
/// plain data for the rendering layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeConfig {
    /// Whether the field is shown at all.
    pub when: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub default: Option<Value>,
    pub options: Vec<Value>,
    pub presets: Vec<String>,
}

impl NodeConfig {
    pub fn visible() -> Self {
        Self {
            when: true,
            min: None,
            max: None,
            step: None,
            default: None,
            options: Vec::new(),
            presets: Vec::new(),
        }
    }

    pub fn hidden() -> Self {
        Self {
            when: false,
            ..Self::visible()
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_options<I, V>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_presets<I, S>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.presets = presets.into_iter().map(Into::into).collect();
        self
    }
}
