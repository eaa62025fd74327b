//! CLI 通用输出格式化模块
//!
//! 提供 table/json/yaml 三种输出格式的通用实现

use anyhow::Result;
use serde::Serialize;

/// 可输出为表格行的数据 trait
pub trait TableRow {
    /// 返回表格列标题
    fn headers() -> Vec<&'static str>;

    /// 返回该项的表格行数据
    fn row(&self) -> Vec<String>;
}

/// 按列宽对齐一行
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<width$}", c, width = w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// 渲染表格，列宽取表头与内容的最大宽度
pub fn render_table<T: TableRow>(items: &[T]) -> String {
    let headers: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    let rows: Vec<Vec<String>> = items.iter().map(|i| i.row()).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let header_line = format_line(&headers, &widths);
    let mut out = String::new();
    out.push_str(&header_line);
    out.push('\n');
    out.push_str(&"-".repeat(header_line.chars().count()));
    out.push('\n');
    for row in &rows {
        out.push_str(&format_line(row, &widths));
        out.push('\n');
    }
    out
}

/// 表格格式输出
pub fn print_table<T: TableRow>(items: &[T]) {
    print!("{}", render_table(items));
}

/// JSON 格式输出
pub fn print_json<T: Serialize>(items: &[T]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(items)?);
    Ok(())
}

/// YAML 格式输出
pub fn print_yaml<T: Serialize>(items: &[T]) -> Result<()> {
    print!("{}", serde_yaml::to_string(items)?);
    Ok(())
}

/// 根据格式参数选择输出方式
pub fn output_formatted<T: TableRow + Serialize>(items: &[T], format: &str) -> Result<()> {
    match format {
        "json" => print_json(items)?,
        "yaml" => print_yaml(items)?,
        _ => print_table(items),
    }
    Ok(())
}

/// 将可选值渲染为表格单元格
pub fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// 配额单元格，`None` 表示无限制
pub fn limit_cell(limit: Option<u64>) -> String {
    limit
        .map(|v| v.to_string())
        .unwrap_or_else(|| "Unlimited".to_string())
}
