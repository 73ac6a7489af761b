use crate::common::{Result, ServiceManager, ServiceRestartSnafu};

pub struct Systemctl {
    program: String,
    unit: String,
}

impl ServiceManager for Systemctl {
    fn restart(&self) -> Result<()> {
        tracing::debug!(program = self.program.as_str(), unit = self.unit.as_str(), "Restarting service");
        let output = std::process::Command::new(&self.program)
            .args(["restart", self.unit.as_str()])
            .output()
            .map_err(|err| {
                ServiceRestartSnafu {
                    unit: &self.unit,
                    message: format!("Failed to run {}: {err}", self.program),
                }
                .build()
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let mut message = format!("{} exited with {}", self.program, output.status);
            if !stderr.trim().is_empty() {
                message.push_str(&format!(": {}", stderr.trim()));
            }
            return ServiceRestartSnafu {
                unit: &self.unit,
                message,
            }
            .fail();
        }

        tracing::info!(unit = self.unit.as_str(), "Service restarted");
        Ok(())
    }
}

impl From<super::Config> for Systemctl {
    fn from(value: super::Config) -> Self {
        Self {
            program: value.program,
            unit: value.unit,
        }
    }
}
