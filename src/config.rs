use std::env;

pub const DEFAULT_VISION_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_VISION_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_EDITING_BASE_URL: &str = "https://fal.run";
/// Quality knobs for the edit request, tuned for prompt fidelity over speed.
pub const DEFAULT_GUIDANCE_SCALE: f32 = 7.5;
pub const DEFAULT_INFERENCE_STEPS: u32 = 35;
pub const DEFAULT_HOSTING_BASE_URL: &str = "https://api.imgbb.com";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

/// Vision-language model used to describe the uploaded photo.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

impl Default for VisionConfig {
    fn default() -> Self {
        VisionConfig {
            api_key: None,
            model: DEFAULT_VISION_MODEL.to_string(),
            base_url: DEFAULT_VISION_BASE_URL.to_string(),
        }
    }
}

impl VisionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("ANTHROPIC_API_KEY").ok();
        let model =
            env::var("ANTHROPIC_MODEL").unwrap_or_else(|_| DEFAULT_VISION_MODEL.to_string());
        let base_url =
            env::var("ANTHROPIC_BASE_URL").unwrap_or_else(|_| DEFAULT_VISION_BASE_URL.to_string());

        VisionConfig {
            api_key,
            model,
            base_url,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Image-editing generation API that renders the grid.
#[derive(Debug, Clone)]
pub struct EditingConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub guidance_scale: f32,
    pub inference_steps: u32,
}

impl Default for EditingConfig {
    fn default() -> Self {
        EditingConfig {
            api_key: None,
            base_url: DEFAULT_EDITING_BASE_URL.to_string(),
            guidance_scale: DEFAULT_GUIDANCE_SCALE,
            inference_steps: DEFAULT_INFERENCE_STEPS,
        }
    }
}

impl EditingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("FAL_KEY").ok();
        let base_url =
            env::var("FAL_BASE_URL").unwrap_or_else(|_| DEFAULT_EDITING_BASE_URL.to_string());
        let guidance_scale = env::var("FAL_GUIDANCE_SCALE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_GUIDANCE_SCALE);
        let inference_steps = env::var("FAL_INFERENCE_STEPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_INFERENCE_STEPS);

        EditingConfig {
            api_key,
            base_url,
            guidance_scale,
            inference_steps,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_quality(mut self, guidance_scale: f32, inference_steps: u32) -> Self {
        self.guidance_scale = guidance_scale;
        self.inference_steps = inference_steps;
        self
    }
}

/// Third-party image host that turns a base64 payload into a public URL.
///
/// The key has no built-in fallback; a missing `IMGBB_API_KEY` fails the
/// upload operation with a configuration error before any network call.
#[derive(Debug, Clone)]
pub struct HostingConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        HostingConfig {
            api_key: None,
            base_url: DEFAULT_HOSTING_BASE_URL.to_string(),
        }
    }
}

impl HostingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("IMGBB_API_KEY").ok();
        let base_url =
            env::var("IMGBB_BASE_URL").unwrap_or_else(|_| DEFAULT_HOSTING_BASE_URL.to_string());

        HostingConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Process-wide configuration, read once at startup and handed to
/// [`crate::upstream::GridClient::from_config`] by reference.
///
/// Missing credentials never prevent startup; each operation checks its own
/// credential before touching the network, so the unaffected routes keep
/// working.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub vision: VisionConfig,
    pub editing: EditingConfig,
    pub hosting: HostingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            vision: VisionConfig::default(),
            editing: EditingConfig::default(),
            hosting: HostingConfig::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let host = env::var("NINEGRID_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("NINEGRID_PORT")
            .ok()
            .and_then(|port| port.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Config {
            host,
            port,
            vision: VisionConfig::from_env(),
            editing: EditingConfig::from_env(),
            hosting: HostingConfig::from_env(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_vision(mut self, config: VisionConfig) -> Self {
        self.vision = config;
        self
    }

    pub fn with_editing(mut self, config: EditingConfig) -> Self {
        self.editing = config;
        self
    }

    pub fn with_hosting(mut self, config: HostingConfig) -> Self {
        self.hosting = config;
        self
    }
}
