use ron::ser::PrettyConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

pub fn write_as_ron<W: io::Write, S: Serialize>(writer: W, object: S) -> ron::Result<()> {
    ron::ser::to_writer_pretty(writer, &object, PrettyConfig::default().struct_names(true))
}

pub fn to_ron_string<S: Serialize>(object: S) -> ron::Result<String> {
    ron::ser::to_string_pretty(&object, PrettyConfig::new().struct_names(true))
}

pub fn from_ron_str<T: DeserializeOwned>(input: &str) -> Result<T, ron::error::SpannedError> {
    ron::from_str(input)
}
