//! @ai:module:intent Create starter blueprint files
//! @ai:module:layer application
//! @ai:module:public_api blueprint_template, init_blueprint
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// @ai:intent Render a starter blueprint showing every component shape
/// @ai:effects pure
pub fn blueprint_template(module_name: &str) -> String {
    format!(
        r#"# {module_name}
Brief description of what this module does

deps: package1[dependency1]; .sibling.module[Item]

ExampleId = int

ExampleClass:
  - __init__(param: str)
  - method_name(param: str) -> str  # Description
  - property_name: str

@example_decorator
def example_function(param: int) -> bool:
  """Function description"""
  # Implementation notes

CONSTANT_NAME: str = "value"

notes: implementation detail 1, performance consideration, future enhancement
"#
    )
}

/// @ai:intent Write a starter blueprint named after the module into `dir`
/// @ai:pre dir exists
/// @ai:post returns the path of the written file
/// @ai:effects fs:write
pub fn init_blueprint(module_name: &str, dir: &Path, force: bool) -> Result<PathBuf> {
    let path = dir.join(format!("{}.md", module_name));

    if path.exists() && !force {
        return Err(Error::AlreadyExists(path));
    }

    std::fs::write(&path, blueprint_template(module_name))?;
    info!(path = %path.display(), "created blueprint");
    Ok(path)
}
