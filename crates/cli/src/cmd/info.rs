use anyhow::Result;
use stddirs_lib::Host;

use crate::output::{OutputFormat, print_info, print_json, print_stat};

pub fn cmd_info(host: &Host<'_>, format: OutputFormat) -> Result<()> {
  let family = host.os().ok();

  if format.is_json() {
    return print_json(&serde_json::json!({ "target": host.target, "family": family }));
  }

  print_info("Platform:");
  print_stat("target", host.target);
  match family {
    Some(os) => print_stat("family", os.as_str()),
    None => print_stat("family", "unsupported"),
  }

  Ok(())
}
