/// Settings for building a [`Fetcher`](crate::Fetcher).
///
/// No timeout is configured: a request runs until the transport settles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOptions {
    pub user_agent: String,
    pub default_headers: Vec<(String, String)>,
}

impl Default for FetchOptions {
    fn default() -> Self {
        FetchOptions {
            user_agent: default_user_agent(),
            default_headers: Vec::new(),
        }
    }
}

impl FetchOptions {
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }
}

pub fn default_user_agent() -> String {
    format!("domwalk/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = FetchOptions::default();
        assert!(options.user_agent.starts_with("domwalk/"));
        assert!(options.default_headers.is_empty());
    }

    #[test]
    fn test_builder_methods() {
        let options = FetchOptions::default()
            .with_user_agent("custom/1.0")
            .with_header("Accept", "text/html");

        assert_eq!(options.user_agent, "custom/1.0");
        assert_eq!(
            options.default_headers,
            vec![("Accept".to_string(), "text/html".to_string())]
        );
    }
}
