use serde::{Deserialize, Serialize};

/// Configuration consumed by the native wrapper toolchain when it packages
/// the web bundle as a mobile app. Field names follow the wrapper's JSON
/// schema, hence the camelCase renames.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub app_id: String,
    pub app_name: String,
    pub web_dir: String, // Built web assets, relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<ShellServer>,
    pub plugins: ShellPlugins,
}

/// Dev mode only: points the shell at a running dev server instead of the
/// bundled assets.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShellServer {
    pub url: String,
    pub cleartext: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShellPlugins {
    #[serde(rename = "SplashScreen")]
    pub splash_screen: SplashScreen,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SplashScreen {
    /// Zero skips the plugin's built-in splash delay entirely; the app
    /// renders as soon as the web view is ready.
    pub launch_show_duration: u32,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            app_id: "com.swapscircle.app".into(),
            app_name: "SwapsCircle".into(),
            web_dir: "target/site".into(),
            server: None,
            plugins: ShellPlugins {
                splash_screen: SplashScreen {
                    launch_show_duration: 0,
                },
            },
        }
    }
}

impl ShellConfig {
    pub fn with_dev_server(url: impl Into<String>) -> Self {
        ShellConfig {
            server: Some(ShellServer {
                url: url.into(),
                cleartext: true,
            }),
            ..ShellConfig::default()
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
