// src/lib.rs

#![doc(html_root_url = "https://docs.rs/mdns-herald/0.1.0")]
#![doc = r#"
# mdns-herald

mdns-herald reads a list of hostname aliases from a text file and launches an
external mDNS publisher (such as `mdns-publish-cname`), passing each alias as
a command-line argument.

## Modules

- [`config`]: Configuration loading and merging from CLI, file, and environment.
- [`aliases`]: Alias list loading from the line-oriented alias file.
- [`launcher`]: Publisher launching and exit-status propagation.
- [`error`]: Error taxonomy for alias loading and launching.

See the README for usage examples and more details.
"#]

pub mod aliases;
pub mod config;
pub mod error;
pub mod launcher;
