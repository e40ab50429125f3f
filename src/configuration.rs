use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    // Environment values always arrive as strings.
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Layered lookup: `configuration/base.yaml` supplies the defaults,
/// `HOST`/`PORT` environment variables override them.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::Environment::default())
        .build()?;

    settings.try_deserialize::<Settings>()
}
