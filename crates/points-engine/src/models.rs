//! 小票领域模型
//!
//! `ReceiptPayload` 是线上报文的形状，所有字段可缺省，以便把缺字段识别为校验错误；
//! `Receipt` 是校验通过后的领域模型，日期、时间与金额均已解析为强类型。

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::amount::{Amount, RawAmount};
use crate::error::{PointsError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const TIME_FORMAT_WITH_SECONDS: &str = "%H:%M:%S";

/// 小票报文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptPayload {
    pub retailer: Option<String>,
    pub purchase_date: Option<String>,
    pub purchase_time: Option<String>,
    pub items: Option<Vec<ItemPayload>>,
    pub total: Option<RawAmount>,
}

/// 商品行报文
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub short_description: Option<String>,
    pub price: Option<RawAmount>,
}

/// 校验通过的小票
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<Item>,
    pub total: Amount,
}

/// 商品行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub short_description: String,
    pub price: Amount,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: Amount) -> Self {
        Self {
            short_description: short_description.into(),
            price,
        }
    }

    fn from_payload(index: usize, payload: &ItemPayload) -> Result<Self> {
        let short_description =
            payload
                .short_description
                .as_ref()
                .ok_or(PointsError::MissingItemField {
                    index,
                    field: "shortDescription",
                })?;
        let price = payload.price.as_ref().ok_or(PointsError::MissingItemField {
            index,
            field: "price",
        })?;

        Ok(Self::new(
            short_description.clone(),
            Amount::parse(&format!("items[{}].price", index), price)?,
        ))
    }
}

impl Receipt {
    /// 校验报文并转换为领域模型
    ///
    /// 先检查五个顶层必填字段是否齐全，再逐项解析。任何一步失败都返回校验错误。
    pub fn from_payload(payload: &ReceiptPayload) -> Result<Self> {
        let retailer = payload
            .retailer
            .as_ref()
            .ok_or(PointsError::MissingField("retailer"))?;
        let purchase_date = payload
            .purchase_date
            .as_deref()
            .ok_or(PointsError::MissingField("purchaseDate"))?;
        let purchase_time = payload
            .purchase_time
            .as_deref()
            .ok_or(PointsError::MissingField("purchaseTime"))?;
        let items = payload
            .items
            .as_ref()
            .ok_or(PointsError::MissingField("items"))?;
        let total = payload
            .total
            .as_ref()
            .ok_or(PointsError::MissingField("total"))?;

        let items = items
            .iter()
            .enumerate()
            .map(|(index, item)| Item::from_payload(index, item))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            retailer: retailer.clone(),
            purchase_date: parse_date(purchase_date)?,
            purchase_time: parse_time(purchase_time)?,
            items,
            total: Amount::parse("total", total)?,
        })
    }
}

/// 解析 `YYYY-MM-DD` 格式的购买日期
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| PointsError::InvalidDate(value.to_string()))
}

/// 解析 24 小时制 `HH:MM` 格式的购买时间，兼容带秒的 `HH:MM:SS`
pub fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, TIME_FORMAT_WITH_SECONDS))
        .map_err(|_| PointsError::InvalidTime(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use rust_decimal::Decimal;
    use serde_json::json;

    fn target_payload() -> ReceiptPayload {
        serde_json::from_value(json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"},
                {"shortDescription": "Emils Cheese Pizza", "price": "12.25"}
            ],
            "total": "18.74"
        }))
        .unwrap()
    }

    #[test]
    fn test_payload_uses_camel_case() {
        let payload = target_payload();
        assert_eq!(payload.purchase_date.as_deref(), Some("2022-01-01"));
        assert_eq!(payload.items.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_from_payload() {
        let receipt = Receipt::from_payload(&target_payload()).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date.day(), 1);
        assert_eq!(receipt.purchase_time.hour(), 13);
        assert_eq!(receipt.purchase_time.minute(), 1);
        assert_eq!(receipt.items[1].price.value(), Decimal::new(1225, 2));
        assert_eq!(receipt.total.value(), Decimal::new(1874, 2));
    }

    #[test]
    fn test_missing_top_level_fields() {
        let cases = [
            ("retailer", "retailer"),
            ("purchaseDate", "purchaseDate"),
            ("purchaseTime", "purchaseTime"),
            ("items", "items"),
            ("total", "total"),
        ];

        for (key, expected) in cases {
            let mut value = serde_json::to_value(target_payload()).unwrap();
            value.as_object_mut().unwrap().remove(key);
            let payload: ReceiptPayload = serde_json::from_value(value).unwrap();

            match Receipt::from_payload(&payload) {
                Err(PointsError::MissingField(field)) => assert_eq!(field, expected),
                other => panic!("expected MissingField({}), got {:?}", expected, other),
            }
        }
    }

    #[test]
    fn test_null_field_is_missing() {
        let mut payload = target_payload();
        payload.total = None;
        assert!(matches!(
            Receipt::from_payload(&payload),
            Err(PointsError::MissingField("total"))
        ));

        let payload: ReceiptPayload = serde_json::from_value(json!({
            "retailer": null,
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [],
            "total": "1.00"
        }))
        .unwrap();
        assert!(matches!(
            Receipt::from_payload(&payload),
            Err(PointsError::MissingField("retailer"))
        ));
    }

    #[test]
    fn test_missing_item_fields() {
        let mut payload = target_payload();
        payload.items.as_mut().unwrap()[1].price = None;

        match Receipt::from_payload(&payload) {
            Err(PointsError::MissingItemField { index, field }) => {
                assert_eq!(index, 1);
                assert_eq!(field, "price");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_items_are_valid() {
        let mut payload = target_payload();
        payload.items = Some(vec![]);
        assert!(Receipt::from_payload(&payload).unwrap().items.is_empty());
    }

    #[test]
    fn test_invalid_date_and_time() {
        let mut payload = target_payload();
        payload.purchase_date = Some("2022-02-30".to_string());
        assert!(matches!(
            Receipt::from_payload(&payload),
            Err(PointsError::InvalidDate(_))
        ));

        let mut payload = target_payload();
        payload.purchase_time = Some("1:01 PM".to_string());
        assert!(matches!(
            Receipt::from_payload(&payload),
            Err(PointsError::InvalidTime(_))
        ));
    }

    #[test]
    fn test_invalid_total_reports_field() {
        let mut payload = target_payload();
        payload.total = Some(RawAmount::Text("twelve".to_string()));

        match Receipt::from_payload(&payload) {
            Err(PointsError::InvalidAmount { field, value, .. }) => {
                assert_eq!(field, "total");
                assert_eq!(value, "twelve");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_time_formats() {
        assert_eq!(parse_time("14:00").unwrap(), NaiveTime::from_hms_opt(14, 0, 0).unwrap());
        assert_eq!(
            parse_time("14:00:00").unwrap(),
            NaiveTime::from_hms_opt(14, 0, 0).unwrap()
        );
        assert!(parse_time("24:00").is_err());
        assert!(parse_time("").is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(
            parse_date("2022-03-20").unwrap(),
            NaiveDate::from_ymd_opt(2022, 3, 20).unwrap()
        );
        assert!(parse_date("03/20/2022").is_err());
        assert!(parse_date("2022-03-20T00:00:00").is_err());
    }
}
