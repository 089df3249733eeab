//! 宏集合：`row!` 构造一行，`sql!` 以可变参数调用 `SqlProcessor::process`。

/// 构造 [`crate::Row`]：`row!{ "id%i" => 1, "title" => "x" }`。
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut row = $crate::Row::new();
        $(
            row.push($key, $value);
        )+
        row
    }};
}

/// 以不定长参数处理模板：`sql!(processor, "SELECT %i", 1)`。
///
/// 每个参数通过 `Arg::from` 转换，因此可以混用整数、字符串、`Row`、`Vec<Row>` 等。
#[macro_export]
macro_rules! sql {
    ($processor:expr, $template:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Arg> = ::std::vec![$($crate::Arg::from($arg)),*];
        $processor.process($template, args)
    }};
}
