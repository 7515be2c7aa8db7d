//! 产品数据模型

use super::error::ProductError;

/// 请求参数，两者都按原始字符串接收
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddProductParams {
    pub name: Option<String>,
    pub price: Option<String>,
}

impl AddProductParams {
    /// 从查询参数键值对中提取，同名参数只取第一次出现的值
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut params.name,
                "price" => &mut params.price,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

/// 待写入 `PRODUCT` 表的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: String,
    pub price: i64,
}

impl Product {
    /// `name` 缺失时写入的字面值
    pub const ABSENT_NAME: &'static str = "null";

    /// 解析请求参数
    ///
    /// `price` 缺失时按空串解析，与非数字一样得到解析错误。
    pub fn parse(name: Option<&str>, price: Option<&str>) -> Result<Self, ProductError> {
        let price = price.unwrap_or_default().parse::<i64>()?;
        let name = name.unwrap_or(Self::ABSENT_NAME).to_string();
        Ok(Self { name, price })
    }

    /// 拼接插入语句
    ///
    /// 注意：`name` 未做任何转义，直接嵌入语句文本，存在 SQL 注入风险。
    pub fn insert_statement(&self) -> String {
        format!(
            "INSERT INTO PRODUCT (NAME, PRICE) VALUES (\"{}\",{})",
            self.name, self.price
        )
    }
}
