use crate::assets::ImageRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A company held by (or invested in by) the holding company
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    /// Derived from the name at creation, unique within the store
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ceo: String,
    #[serde(default)]
    pub founded: Option<NaiveDate>,
    #[serde(default)]
    pub business: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub move_in: Option<NaiveDate>,
    #[serde(default)]
    pub homepage: String,
    #[serde(default)]
    pub note: String,
    /// Selected for the TIPS accelerator program
    #[serde(default)]
    pub tips: bool,
    pub category: CompanyCategory,
    #[serde(default)]
    pub logo: Option<ImageRef>,
    #[serde(default)]
    pub background: Option<ImageRef>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Subsidiaries are founded by the holding company, portfolio companies are investments
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CompanyCategory {
    Subsidiary,
    Portfolio,
}

impl CompanyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanyCategory::Subsidiary => "subsidiary",
            CompanyCategory::Portfolio => "portfolio",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompanyCategory::Subsidiary => "자회사",
            CompanyCategory::Portfolio => "포트폴리오",
        }
    }
}

impl std::fmt::Display for CompanyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A board post (notice, press release, resource, FAQ entry)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: u64,
    pub category: PostCategory,
    pub title: String,
    /// Display string, never parsed
    pub date: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub views: Option<u32>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_new: Option<bool>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PostCategory {
    Notice,
    Press,
    Resources,
    Faq,
}

impl PostCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostCategory::Notice => "notice",
            PostCategory::Press => "press",
            PostCategory::Resources => "resources",
            PostCategory::Faq => "faq",
        }
    }

    /// Board title shown above a post
    pub fn label(&self) -> &'static str {
        match self {
            PostCategory::Notice => "공지사항",
            PostCategory::Press => "보도소식",
            PostCategory::Resources => "자료실",
            PostCategory::Faq => "FAQ",
        }
    }

    pub fn all() -> Vec<PostCategory> {
        vec![
            PostCategory::Notice,
            PostCategory::Press,
            PostCategory::Resources,
            PostCategory::Faq,
        ]
    }
}

impl std::fmt::Display for PostCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A message submitted through the contact form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub contact: String,
    pub email: String,
    pub body: String,
    pub submitted: NaiveDate,
    pub status: InquiryStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    Pending,
    Done,
}

impl InquiryStatus {
    pub fn toggled(self) -> Self {
        match self {
            InquiryStatus::Pending => InquiryStatus::Done,
            InquiryStatus::Done => InquiryStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryStatus::Pending => "대기",
            InquiryStatus::Done => "완료",
        }
    }
}

/// Time-boxed promotional overlay on the home page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Popup {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub visible: bool,
}

impl Popup {
    /// Visible and `day` falls inside the inclusive start..=end window
    pub fn is_active_on(&self, day: NaiveDate) -> bool {
        self.visible && self.start <= day && day <= self.end
    }
}

/// Parse the date formats the admin forms accept (`2021-03-15` or `2021.03.15`)
pub fn parse_date(input: &str) -> crate::Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y.%m.%d"))
        .map_err(|_| crate::Error::InvalidDate(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_order_and_labels() {
        let labels: Vec<&str> = PostCategory::all().iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["공지사항", "보도소식", "자료실", "FAQ"]);
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
        assert_eq!(parse_date("2021-03-15").unwrap(), expected);
        assert_eq!(parse_date(" 2021.03.15 ").unwrap(), expected);
        assert!(parse_date("15/03/2021").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_inquiry_status_toggle() {
        assert_eq!(InquiryStatus::Pending.toggled(), InquiryStatus::Done);
        assert_eq!(InquiryStatus::Done.toggled(), InquiryStatus::Pending);
    }

    #[test]
    fn test_category_serde_literals() {
        let json = serde_json::to_string(&PostCategory::Resources).unwrap();
        assert_eq!(json, "\"resources\"");
        let cat: CompanyCategory = serde_json::from_str("\"subsidiary\"").unwrap();
        assert_eq!(cat, CompanyCategory::Subsidiary);
    }

    #[test]
    fn test_popup_window_is_inclusive() {
        let popup = Popup {
            id: 1,
            title: "모집".to_string(),
            image: None,
            body: None,
            link: None,
            start: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 31).unwrap(),
            visible: true,
        };
        assert!(popup.is_active_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()));
        assert!(popup.is_active_on(NaiveDate::from_ymd_opt(2024, 5, 31).unwrap()));
        assert!(!popup.is_active_on(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));

        let hidden = Popup { visible: false, ..popup };
        assert!(!hidden.is_active_on(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()));
    }
}
