mod json;
mod text;

pub(crate) use json::{
    output_config_json, output_extract_json, output_locate_json, output_rollover_json,
};
pub(crate) use text::{format_extract, format_locate, format_rollover};
