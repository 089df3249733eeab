//! 输出缓冲：处理器按片段顺序拼接最终 SQL。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 第 `index` 个元素之前写入分隔符（首个元素不写）。
    pub(crate) fn write_separator(&mut self, index: usize, sep: &str) {
        if index > 0 {
            self.buf.push_str(sep);
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
