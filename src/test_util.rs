//! 测试用格式化器：记录每一次调用，便于断言调用顺序与参数。

use crate::error::ProcessResult;
use crate::formatter::SqlFormatter;
use crate::value::SqlDateTime;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordingFormatter {
    calls: Arc<Mutex<Vec<String>>>,
}

impl RecordingFormatter {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

impl SqlFormatter for RecordingFormatter {
    fn format_identifier(&self, name: &str) -> String {
        self.record(format!("identifier({name})"));
        name.to_string()
    }

    fn format_string(&self, value: &str) -> String {
        self.record(format!("string({value})"));
        format!("'{}'", value.replace('\'', "\\'"))
    }

    fn format_int(&self, value: i64) -> String {
        self.record(format!("int({value})"));
        value.to_string()
    }

    fn format_uint(&self, value: u64) -> String {
        self.record(format!("uint({value})"));
        value.to_string()
    }

    fn format_float(&self, value: f64) -> String {
        self.record(format!("float({value})"));
        value.to_string()
    }

    fn format_bool(&self, value: bool) -> String {
        self.record(format!("bool({value})"));
        String::from(if value { "1" } else { "0" })
    }

    fn format_null(&self) -> String {
        self.record(String::from("null"));
        String::from("NULL")
    }

    fn format_bytes(&self, value: &[u8]) -> ProcessResult<String> {
        self.record(format!("bytes({})", value.len()));
        Ok(String::from("X''"))
    }

    fn format_datetime(&self, value: &SqlDateTime) -> ProcessResult<String> {
        self.record(format!("datetime({})", value.dt.unix_timestamp()));
        Ok(format!("'{}'", value.dt.unix_timestamp()))
    }
}
