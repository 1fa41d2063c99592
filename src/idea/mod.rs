//! IntelliJ IDEA run configuration generation.
//!
//! Writes one XML file per launch configuration under
//! `.idea/runConfigurations/`. The four configurations mirror the usual
//! mod-development loop: run or debug the game against the Steam install,
//! or against the working copy of the mod ("local" variants, which point
//! the game's home at the project root so it picks up the mod in place).
//!
//! Only the artifact shape matters here; IDEA's own semantics for these
//! files are treated as opaque.

use std::path::{Path, PathBuf};

use crate::project::Project;
use crate::{Error, Result};

/// Java entry point for the game client.
const MAIN_CLASS: &str = "zombie.gameStates.MainScreenState";

/// JVM parameters shared by every configuration.
const BASE_VM_PARAMETERS: &str =
    "-Dzomboid.steam=1 -Dzomboid.znetlog=1 -XX:+UseZGC -Xms2048m -Xmx2048m";

/// The four launch configurations Capsid generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchRunConfig {
    RunZomboid,
    RunZomboidLocal,
    DebugZomboid,
    DebugZomboidLocal,
}

/// Every configuration, in generation order.
pub const LAUNCH_RUN_CONFIGS: [LaunchRunConfig; 4] = [
    LaunchRunConfig::RunZomboid,
    LaunchRunConfig::RunZomboidLocal,
    LaunchRunConfig::DebugZomboid,
    LaunchRunConfig::DebugZomboidLocal,
];

impl LaunchRunConfig {
    /// Display name shown in the IDE's configuration picker.
    pub fn name(&self) -> &'static str {
        match self {
            LaunchRunConfig::RunZomboid => "Run Zomboid",
            LaunchRunConfig::RunZomboidLocal => "Run Zomboid (local)",
            LaunchRunConfig::DebugZomboid => "Debug Zomboid",
            LaunchRunConfig::DebugZomboidLocal => "Debug Zomboid (local)",
        }
    }

    /// File name under `.idea/runConfigurations/`. IDEA expects spaces
    /// and parentheses mangled to underscores.
    pub fn file_name(&self) -> &'static str {
        match self {
            LaunchRunConfig::RunZomboid => "Run_Zomboid.xml",
            LaunchRunConfig::RunZomboidLocal => "Run_Zomboid_local.xml",
            LaunchRunConfig::DebugZomboid => "Debug_Zomboid.xml",
            LaunchRunConfig::DebugZomboidLocal => "Debug_Zomboid_local.xml",
        }
    }

    fn is_debug(&self) -> bool {
        matches!(
            self,
            LaunchRunConfig::DebugZomboid | LaunchRunConfig::DebugZomboidLocal
        )
    }

    fn is_local(&self) -> bool {
        matches!(
            self,
            LaunchRunConfig::RunZomboidLocal | LaunchRunConfig::DebugZomboidLocal
        )
    }

    /// JVM parameters for this configuration.
    fn vm_parameters(&self, project: &Project) -> String {
        let mut params = String::from(BASE_VM_PARAMETERS);
        if self.is_debug() {
            params.push_str(" -Ddebug");
        }
        if self.is_local() {
            // Point the game's home at the project so it loads the mod
            // from the working copy.
            params.push_str(&format!(" -Duser.home={}", project.root().display()));
        }
        params
    }

    /// Render the configuration as IDEA project XML.
    pub fn render(&self, project: &Project, game_dir: &Path) -> String {
        let working_dir = if self.is_local() {
            project.root().display().to_string()
        } else {
            game_dir.display().to_string()
        };

        format!(
            r#"<component name="ProjectRunConfigurationManager">
  <configuration default="false" name="{name}" type="Application" factoryName="Application">
    <option name="MAIN_CLASS_NAME" value="{main_class}" />
    <module name="{module}" />
    <option name="VM_PARAMETERS" value="{vm_parameters}" />
    <option name="WORKING_DIRECTORY" value="{working_dir}" />
    <method v="2">
      <option name="Make" enabled="true" />
    </method>
  </configuration>
</component>
"#,
            name = escape_xml(self.name()),
            main_class = MAIN_CLASS,
            module = escape_xml(&project.dir_name()),
            vm_parameters = escape_xml(&self.vm_parameters(project)),
            working_dir = escape_xml(&working_dir),
        )
    }

    /// Write this configuration under the project's run configuration
    /// directory, creating it if needed. Returns the written path.
    pub fn write(&self, project: &Project, game_dir: &Path) -> Result<PathBuf> {
        let dir = project.run_configs_dir();
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render(project, game_dir)).map_err(|e| {
            Error::Other(format!("failed to write {}: {}", path.display(), e))
        })?;
        Ok(path)
    }
}

/// Escape a string for use in XML attribute values.
fn escape_xml(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestEnv;

    #[test]
    fn render_shapes_the_expected_xml() {
        let project = Project::new("/work/mymod");
        let xml = LaunchRunConfig::RunZomboid.render(&project, Path::new("/opt/pz"));

        assert!(xml.contains(r#"name="Run Zomboid""#));
        assert!(xml.contains(r#"value="zombie.gameStates.MainScreenState""#));
        assert!(xml.contains(r#"<module name="mymod" />"#));
        assert!(xml.contains(r#"value="/opt/pz""#));
        assert!(!xml.contains("-Ddebug"));
        assert!(!xml.contains("user.home"));
    }

    #[test]
    fn debug_and_local_variants_adjust_parameters() {
        let project = Project::new("/work/mymod");
        let xml = LaunchRunConfig::DebugZomboidLocal.render(&project, Path::new("/opt/pz"));

        assert!(xml.contains("-Ddebug"));
        assert!(xml.contains("-Duser.home=/work/mymod"));
        // Local variants run from the project, not the game install.
        assert!(xml.contains(r#"<option name="WORKING_DIRECTORY" value="/work/mymod" />"#));
    }

    #[test]
    fn attribute_values_are_escaped() {
        let project = Project::new("/work/a&b");
        let xml = LaunchRunConfig::RunZomboid.render(&project, Path::new("/opt/pz <x>"));
        assert!(xml.contains("a&amp;b"));
        assert!(xml.contains("/opt/pz &lt;x&gt;"));
    }

    #[test]
    fn write_creates_directory_and_file() {
        let env = TestEnv::new();
        let project = env.project();

        let path = LaunchRunConfig::RunZomboid
            .write(&project, Path::new("/opt/pz"))
            .unwrap();

        assert_eq!(path, project.run_configs_dir().join("Run_Zomboid.xml"));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("ProjectRunConfigurationManager"));
    }

    #[test]
    fn file_names_are_unique() {
        let mut names: Vec<_> = LAUNCH_RUN_CONFIGS.iter().map(|c| c.file_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LAUNCH_RUN_CONFIGS.len());
    }
}
