use std::time::Duration;

pub static REGISTRY_URL: &str = "https://registry.npmjs.org/";

static DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Answers whether it's worth trying to install anything.
pub trait Probe {
    fn is_online(&self) -> bool;
}

/// Sends a `HEAD` request to the package registry. Getting *any* response
/// back, error statuses included, means we're online. The default probe goes
/// through the proxy named by `HTTPS_PROXY`/`HTTP_PROXY`/`ALL_PROXY`, if any.
#[derive(Clone, Debug)]
pub struct RegistryProbe {
    url: String,
    timeout: Duration,
    proxy_from_env: bool,
}

impl Default for RegistryProbe {
    fn default() -> Self {
        Self::new(REGISTRY_URL, DEFAULT_TIMEOUT).proxy_from_env(true)
    }
}

impl RegistryProbe {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
            proxy_from_env: false,
        }
    }

    pub fn proxy_from_env(mut self, proxy_from_env: bool) -> Self {
        self.proxy_from_env = proxy_from_env;
        self
    }
}

impl Probe for RegistryProbe {
    fn is_online(&self) -> bool {
        let agent = ureq::AgentBuilder::new()
            .timeout(self.timeout)
            .try_proxy_from_env(self.proxy_from_env)
            .build();
        match agent.head(&self.url).call() {
            Ok(_) => true,
            Err(ureq::Error::Status(status, _)) => {
                log::info!("{} answered with status {}", self.url, status);
                true
            }
            Err(ureq::Error::Transport(err)) => {
                log::info!("failed to reach {}: {}", self.url, err);
                false
            }
        }
    }
}
