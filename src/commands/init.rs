use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(crate::config::CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Leadmap Configuration

[sentiment]
# policy = "raw" | "normalized"
policy = "raw"
threshold = 0.2
normalized_cutoff = 0.5

[geographic.breakpoints]
high = 0.7
mid = 0.4

[geographic.zip]
high = 0.5
mid = 0.3
low = 0.1

[geographic.country]
high = 0.3
mid = 0.2
low = 0.05

[geographic.state]
high = 0.2
mid = 0.1
low = 0.05

[lifecycle]
pre_engaged = 0.1
engaged = 0.2
warm = 0.3
decline = -0.2
recovery = 0.6
anomaly = -0.1
direct_conversion = 0.4

[engagement]
status_active = 0.7
status_inactive = 0.3
status_closed = 0.1
status_other = 0.5
interaction_high = 0.3
interaction_mid = 0.2
interaction_low = 0.1
profession_fallback = 0.5

[output]
default_format = "terminal"
summary_rows = 20
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created {} configuration file", config_path.display());

    Ok(())
}
