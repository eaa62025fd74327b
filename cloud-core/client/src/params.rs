//! 扁平查询参数
//!
//! 平台所有命令都以扁平的查询参数传参：
//! - 列表参数以逗号连接，如 `resourceids=a,b`
//! - 映射参数按下标展开，如 `tags[0].key=env&tags[0].value=prod`

use std::collections::BTreeMap;
use std::fmt::Display;

/// 命令参数集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    inner: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置参数（覆盖同名参数）
    pub fn set(&mut self, key: &str, value: impl Display) -> &mut Self {
        self.inner.insert(key.to_string(), value.to_string());
        self
    }

    /// 仅当值存在时设置参数
    pub fn set_opt<V: Display>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.set(key, v);
        }
        self
    }

    /// 设置逗号分隔的列表参数，空列表不设置
    pub fn set_list<V: Display>(&mut self, key: &str, values: &[V]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(",");
            self.set(key, joined);
        }
        self
    }

    /// 设置映射参数，按 `key[i].name` / `key[i].value` 展开
    ///
    /// # Arguments
    /// * `key` - 参数名，如 `tags`
    /// * `name_field` / `value_field` - 展开后的字段名，标签为 `key` / `value`
    pub fn set_map(
        &mut self,
        key: &str,
        name_field: &str,
        value_field: &str,
        entries: &BTreeMap<String, String>,
    ) -> &mut Self {
        for (i, (name, value)) in entries.iter().enumerate() {
            self.set(&format!("{}[{}].{}", key, i, name_field), name);
            self.set(&format!("{}[{}].{}", key, i, value_field), value);
        }
        self
    }

    /// 合并另一组参数（后者覆盖前者）
    pub fn extend(&mut self, other: Params) -> &mut Self {
        self.inner.extend(other.inner);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// 可转换为命令参数的选项
pub trait ToParams {
    fn to_params(&self) -> Params;
}
