// Admin panel handlers - list, create, update, delete for every entity kind
use crate::assets::ImageRef;
use crate::models::{
    Company, CompanyCategory, Inquiry, InquiryStatus, Popup, Post, PostCategory,
};
use crate::store::{
    require, InquiryDraft, SiteStore, MSG_EMAIL_REQUIRED, MSG_INQUIRY_BODY_REQUIRED,
    MSG_NAME_REQUIRED,
};
use crate::{Error, Result};
use chrono::NaiveDate;
use tracing::debug;

pub const MSG_COMPANY_NAME_REQUIRED: &str = "기업명을 입력해주세요";
pub const MSG_TITLE_REQUIRED: &str = "제목을 입력해주세요";

/// New company form
#[derive(Debug, Clone)]
pub struct CompanyDraft {
    pub name: String,
    pub ceo: String,
    pub founded: Option<NaiveDate>,
    pub business: String,
    pub room: String,
    pub move_in: Option<NaiveDate>,
    pub homepage: String,
    pub note: String,
    pub tips: bool,
    pub category: CompanyCategory,
    pub logo: Option<ImageRef>,
    pub background: Option<ImageRef>,
    pub summary: Option<String>,
}

impl CompanyDraft {
    pub fn new(name: impl Into<String>, category: CompanyCategory) -> Self {
        Self {
            name: name.into(),
            ceo: String::new(),
            founded: None,
            business: String::new(),
            room: String::new(),
            move_in: None,
            homepage: String::new(),
            note: String::new(),
            tips: false,
            category,
            logo: None,
            background: None,
            summary: None,
        }
    }
}

/// Fields to merge into an existing company
///
/// The outer `None` leaves a field alone. For optional record fields,
/// `Some(None)` clears the value.
#[derive(Debug, Clone, Default)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub ceo: Option<String>,
    pub founded: Option<Option<NaiveDate>>,
    pub business: Option<String>,
    pub room: Option<String>,
    pub move_in: Option<Option<NaiveDate>>,
    pub homepage: Option<String>,
    pub note: Option<String>,
    pub tips: Option<bool>,
    pub category: Option<CompanyCategory>,
    pub logo: Option<Option<ImageRef>>,
    pub background: Option<Option<ImageRef>>,
    pub summary: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct PostDraft {
    pub category: PostCategory,
    pub title: String,
    pub date: String,
    pub author: Option<String>,
    pub body: Option<String>,
    pub is_new: bool,
    pub file_type: Option<String>,
    pub file_name: Option<String>,
}

impl PostDraft {
    pub fn new(category: PostCategory, title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            date: date.into(),
            author: None,
            body: None,
            is_new: true,
            file_type: None,
            file_name: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub category: Option<PostCategory>,
    pub title: Option<String>,
    pub date: Option<String>,
    pub author: Option<Option<String>>,
    pub body: Option<Option<String>>,
    pub is_new: Option<Option<bool>>,
    pub file_type: Option<Option<String>>,
    pub file_name: Option<Option<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct InquiryPatch {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub body: Option<String>,
    pub submitted: Option<NaiveDate>,
    pub status: Option<InquiryStatus>,
}

#[derive(Debug, Clone)]
pub struct PopupDraft {
    pub title: String,
    pub image: Option<ImageRef>,
    pub body: Option<String>,
    pub link: Option<String>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct PopupPatch {
    pub title: Option<String>,
    pub image: Option<Option<ImageRef>>,
    pub body: Option<Option<String>>,
    pub link: Option<Option<String>>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub visible: Option<bool>,
}

/// The admin surface over the site store
///
/// Every save validates required fields first and leaves the store
/// untouched on failure. Creates prepend, so the newest entry lists first.
pub struct AdminPanel<'a> {
    store: &'a mut SiteStore,
}

impl<'a> AdminPanel<'a> {
    pub fn new(store: &'a mut SiteStore) -> Self {
        Self { store }
    }

    // ===== Companies =====

    pub fn companies(&self) -> &[Company] {
        self.store.companies()
    }

    pub fn create_company(&mut self, draft: CompanyDraft) -> Result<String> {
        require(&draft.name, MSG_COMPANY_NAME_REQUIRED)?;

        let name = draft.name.trim().to_string();
        let id = self.store.allocate_company_id(&name);
        let company = Company {
            id: id.clone(),
            name,
            ceo: draft.ceo,
            founded: draft.founded,
            business: draft.business,
            room: draft.room,
            move_in: draft.move_in,
            homepage: draft.homepage,
            note: draft.note,
            tips: draft.tips,
            category: draft.category,
            logo: draft.logo,
            background: draft.background,
            summary: draft.summary,
        };

        self.store.companies.insert(0, company);
        debug!("Created company {}", id);
        Ok(id)
    }

    /// Merge changes by id. The id itself never changes, even on rename.
    pub fn update_company(&mut self, id: &str, patch: CompanyPatch) -> Result<()> {
        if let Some(name) = &patch.name {
            require(name, MSG_COMPANY_NAME_REQUIRED)?;
        }

        let company = self
            .store
            .companies
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("company {}", id)))?;

        if let Some(name) = patch.name {
            company.name = name.trim().to_string();
        }
        if let Some(ceo) = patch.ceo {
            company.ceo = ceo;
        }
        if let Some(founded) = patch.founded {
            company.founded = founded;
        }
        if let Some(business) = patch.business {
            company.business = business;
        }
        if let Some(room) = patch.room {
            company.room = room;
        }
        if let Some(move_in) = patch.move_in {
            company.move_in = move_in;
        }
        if let Some(homepage) = patch.homepage {
            company.homepage = homepage;
        }
        if let Some(note) = patch.note {
            company.note = note;
        }
        if let Some(tips) = patch.tips {
            company.tips = tips;
        }
        if let Some(category) = patch.category {
            company.category = category;
        }
        if let Some(logo) = patch.logo {
            company.logo = logo;
        }
        if let Some(background) = patch.background {
            company.background = background;
        }
        if let Some(summary) = patch.summary {
            company.summary = summary;
        }

        debug!("Updated company {}", id);
        Ok(())
    }

    pub fn delete_company(&mut self, id: &str) -> Result<()> {
        let before = self.store.companies.len();
        self.store.companies.retain(|c| c.id != id);
        if self.store.companies.len() == before {
            return Err(Error::NotFound(format!("company {}", id)));
        }
        debug!("Deleted company {}", id);
        Ok(())
    }

    // ===== Posts =====

    /// All posts, or one board's posts
    pub fn posts(&self, category: Option<PostCategory>) -> Vec<&Post> {
        self.store.posts_in(category)
    }

    pub fn create_post(&mut self, draft: PostDraft) -> Result<u64> {
        require(&draft.title, MSG_TITLE_REQUIRED)?;

        let id = self.store.allocate_id();
        self.store.posts.insert(
            0,
            Post {
                id,
                category: draft.category,
                title: draft.title.trim().to_string(),
                date: draft.date,
                author: draft.author,
                views: Some(0),
                body: draft.body,
                is_new: Some(draft.is_new),
                file_type: draft.file_type,
                file_name: draft.file_name,
            },
        );

        debug!("Created post {} in {}", id, draft.category);
        Ok(id)
    }

    pub fn update_post(&mut self, id: u64, patch: PostPatch) -> Result<()> {
        if let Some(title) = &patch.title {
            require(title, MSG_TITLE_REQUIRED)?;
        }

        let post = self
            .store
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("post {}", id)))?;

        if let Some(category) = patch.category {
            post.category = category;
        }
        if let Some(title) = patch.title {
            post.title = title.trim().to_string();
        }
        if let Some(date) = patch.date {
            post.date = date;
        }
        if let Some(author) = patch.author {
            post.author = author;
        }
        if let Some(body) = patch.body {
            post.body = body;
        }
        if let Some(is_new) = patch.is_new {
            post.is_new = is_new;
        }
        if let Some(file_type) = patch.file_type {
            post.file_type = file_type;
        }
        if let Some(file_name) = patch.file_name {
            post.file_name = file_name;
        }

        debug!("Updated post {}", id);
        Ok(())
    }

    pub fn delete_post(&mut self, id: u64) -> Result<()> {
        let before = self.store.posts.len();
        self.store.posts.retain(|p| p.id != id);
        if self.store.posts.len() == before {
            return Err(Error::NotFound(format!("post {}", id)));
        }
        debug!("Deleted post {}", id);
        Ok(())
    }

    // ===== Inquiries =====

    pub fn inquiries(&self) -> &[Inquiry] {
        self.store.inquiries()
    }

    /// Admin-side entry of an inquiry taken by phone or mail.
    ///
    /// Goes through the same path and validation as the public contact form.
    pub fn create_inquiry(&mut self, draft: InquiryDraft, today: NaiveDate) -> Result<u64> {
        self.store.submit_inquiry(draft, today)
    }

    pub fn update_inquiry(&mut self, id: u64, patch: InquiryPatch) -> Result<()> {
        if let Some(name) = &patch.name {
            require(name, MSG_NAME_REQUIRED)?;
        }
        if let Some(email) = &patch.email {
            require(email, MSG_EMAIL_REQUIRED)?;
        }
        if let Some(body) = &patch.body {
            require(body, MSG_INQUIRY_BODY_REQUIRED)?;
        }

        let inquiry = self
            .store
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound(format!("inquiry {}", id)))?;

        if let Some(name) = patch.name {
            inquiry.name = name.trim().to_string();
        }
        if let Some(contact) = patch.contact {
            inquiry.contact = contact;
        }
        if let Some(email) = patch.email {
            inquiry.email = email.trim().to_string();
        }
        if let Some(body) = patch.body {
            inquiry.body = body;
        }
        if let Some(submitted) = patch.submitted {
            inquiry.submitted = submitted;
        }
        if let Some(status) = patch.status {
            inquiry.status = status;
        }

        debug!("Updated inquiry {}", id);
        Ok(())
    }

    /// Badge count on the admin dashboard
    pub fn pending_inquiry_count(&self) -> usize {
        self.store
            .inquiries()
            .iter()
            .filter(|i| i.status == InquiryStatus::Pending)
            .count()
    }

    /// Flip pending <-> done, returns the new status
    pub fn toggle_inquiry_status(&mut self, id: u64) -> Result<InquiryStatus> {
        let inquiry = self
            .store
            .inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| Error::NotFound(format!("inquiry {}", id)))?;

        inquiry.status = inquiry.status.toggled();
        debug!("Inquiry {} is now {:?}", id, inquiry.status);
        Ok(inquiry.status)
    }

    pub fn delete_inquiry(&mut self, id: u64) -> Result<()> {
        let before = self.store.inquiries.len();
        self.store.inquiries.retain(|i| i.id != id);
        if self.store.inquiries.len() == before {
            return Err(Error::NotFound(format!("inquiry {}", id)));
        }
        debug!("Deleted inquiry {}", id);
        Ok(())
    }

    // ===== Popups =====

    pub fn popups(&self) -> &[Popup] {
        self.store.popups()
    }

    pub fn create_popup(&mut self, draft: PopupDraft) -> Result<u64> {
        require(&draft.title, MSG_TITLE_REQUIRED)?;

        let id = self.store.allocate_id();
        self.store.popups.insert(
            0,
            Popup {
                id,
                title: draft.title.trim().to_string(),
                image: draft.image,
                body: draft.body,
                link: draft.link,
                start: draft.start,
                end: draft.end,
                visible: draft.visible,
            },
        );

        debug!("Created popup {}", id);
        Ok(id)
    }

    pub fn update_popup(&mut self, id: u64, patch: PopupPatch) -> Result<()> {
        if let Some(title) = &patch.title {
            require(title, MSG_TITLE_REQUIRED)?;
        }

        let popup = self
            .store
            .popups
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("popup {}", id)))?;

        if let Some(title) = patch.title {
            popup.title = title.trim().to_string();
        }
        if let Some(image) = patch.image {
            popup.image = image;
        }
        if let Some(body) = patch.body {
            popup.body = body;
        }
        if let Some(link) = patch.link {
            popup.link = link;
        }
        if let Some(start) = patch.start {
            popup.start = start;
        }
        if let Some(end) = patch.end {
            popup.end = end;
        }
        if let Some(visible) = patch.visible {
            popup.visible = visible;
        }

        debug!("Updated popup {}", id);
        Ok(())
    }

    /// Show/hide without touching the date window, returns the new flag
    pub fn toggle_popup_visibility(&mut self, id: u64) -> Result<bool> {
        let popup = self
            .store
            .popups
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| Error::NotFound(format!("popup {}", id)))?;

        popup.visible = !popup.visible;
        debug!("Popup {} visible = {}", id, popup.visible);
        Ok(popup.visible)
    }

    pub fn delete_popup(&mut self, id: u64) -> Result<()> {
        let before = self.store.popups.len();
        self.store.popups.retain(|p| p.id != id);
        if self.store.popups.len() == before {
            return Err(Error::NotFound(format!("popup {}", id)));
        }
        debug!("Deleted popup {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_create_company_prepends_and_slugs() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let first = admin
            .create_company(CompanyDraft::new("Blue Cell", CompanyCategory::Portfolio))
            .unwrap();
        let second = admin
            .create_company(CompanyDraft::new("Blue Cell", CompanyCategory::Subsidiary))
            .unwrap();

        assert_eq!(first, "blue-cell");
        assert_eq!(second, "blue-cell-2");
        assert_eq!(admin.companies()[0].id, "blue-cell-2");
    }

    #[test]
    fn test_blank_company_name_is_rejected() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let err = admin
            .create_company(CompanyDraft::new("   ", CompanyCategory::Portfolio))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.to_string(), MSG_COMPANY_NAME_REQUIRED);
        assert!(admin.companies().is_empty());
    }

    #[test]
    fn test_update_company_merges() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);
        let id = admin
            .create_company(CompanyDraft::new("가온", CompanyCategory::Portfolio))
            .unwrap();

        admin
            .update_company(
                &id,
                CompanyPatch {
                    tips: Some(true),
                    founded: Some(Some(date(2020, 1, 2))),
                    ..Default::default()
                },
            )
            .unwrap();

        let company = &admin.companies()[0];
        assert_eq!(company.name, "가온");
        assert!(company.tips);
        assert_eq!(company.founded, Some(date(2020, 1, 2)));

        let err = admin
            .update_company(
                &id,
                CompanyPatch {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(admin.companies()[0].name, "가온");
    }

    #[test]
    fn test_update_company_clears_optional_fields() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let mut draft = CompanyDraft::new("마루", CompanyCategory::Portfolio);
        draft.logo = Some(ImageRef::Url("https://example.com/logo.png".to_string()));
        draft.founded = Some(date(2019, 4, 1));
        draft.summary = Some("물류 로봇".to_string());
        let id = admin.create_company(draft).unwrap();

        admin
            .update_company(
                &id,
                CompanyPatch {
                    logo: Some(None),
                    founded: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();

        let company = &admin.companies()[0];
        assert_eq!(company.logo, None);
        assert_eq!(company.founded, None);
        assert_eq!(company.summary.as_deref(), Some("물류 로봇"));
    }

    #[test]
    fn test_update_post_and_popup_clear_optional_fields() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let mut post = PostDraft::new(PostCategory::Resources, "양식", "2024.03.01");
        post.file_name = Some("form.hwp".to_string());
        post.author = Some("관리자".to_string());
        let post_id = admin.create_post(post).unwrap();
        admin
            .update_post(
                post_id,
                PostPatch {
                    file_name: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        let post = admin.posts(None)[0];
        assert_eq!(post.file_name, None);
        assert_eq!(post.author.as_deref(), Some("관리자"));

        let popup_id = admin
            .create_popup(PopupDraft {
                title: "설명회".to_string(),
                image: None,
                body: None,
                link: Some("https://example.com".to_string()),
                start: date(2024, 1, 1),
                end: date(2024, 1, 31),
                visible: true,
            })
            .unwrap();
        admin
            .update_popup(
                popup_id,
                PopupPatch {
                    link: Some(None),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(admin.popups()[0].link, None);
    }

    #[test]
    fn test_inquiry_create_and_update() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);
        let today = date(2024, 3, 5);

        let draft = InquiryDraft {
            name: "김민수".to_string(),
            contact: "010-0000-0000".to_string(),
            email: "kim@example.com".to_string(),
            body: "전화 문의".to_string(),
        };
        let id = admin.create_inquiry(draft, today).unwrap();
        assert_eq!(admin.inquiries()[0].id, id);
        assert_eq!(admin.pending_inquiry_count(), 1);

        admin
            .update_inquiry(
                id,
                InquiryPatch {
                    contact: Some("02-000-0000".to_string()),
                    status: Some(InquiryStatus::Done),
                    ..Default::default()
                },
            )
            .unwrap();
        let inquiry = &admin.inquiries()[0];
        assert_eq!(inquiry.contact, "02-000-0000");
        assert_eq!(inquiry.name, "김민수");
        assert_eq!(admin.pending_inquiry_count(), 0);

        let err = admin
            .update_inquiry(
                id,
                InquiryPatch {
                    email: Some(" ".to_string()),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_EMAIL_REQUIRED);

        assert!(matches!(
            admin.update_inquiry(999, InquiryPatch::default()),
            Err(Error::NotFound(_))
        ));

        assert!(admin
            .create_inquiry(InquiryDraft::default(), today)
            .unwrap_err()
            .is_validation());
    }

    #[test]
    fn test_unknown_ids_are_not_found() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);
        assert!(matches!(admin.delete_company("nope"), Err(Error::NotFound(_))));
        assert!(matches!(admin.delete_post(42), Err(Error::NotFound(_))));
        assert!(matches!(admin.toggle_inquiry_status(42), Err(Error::NotFound(_))));
        assert!(matches!(admin.toggle_popup_visibility(42), Err(Error::NotFound(_))));
    }

    #[test]
    fn test_post_lifecycle() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let err = admin
            .create_post(PostDraft::new(PostCategory::Notice, "", "2024.03.01"))
            .unwrap_err();
        assert_eq!(err.to_string(), MSG_TITLE_REQUIRED);

        let notice = admin
            .create_post(PostDraft::new(PostCategory::Notice, "공지", "2024.03.01"))
            .unwrap();
        let press = admin
            .create_post(PostDraft::new(PostCategory::Press, "기사", "2024.03.02"))
            .unwrap();
        assert_ne!(notice, press);

        assert_eq!(admin.posts(None).len(), 2);
        assert_eq!(admin.posts(Some(PostCategory::Notice))[0].id, notice);

        admin
            .update_post(
                press,
                PostPatch {
                    category: Some(PostCategory::Notice),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(admin.posts(Some(PostCategory::Notice)).len(), 2);

        admin.delete_post(notice).unwrap();
        assert_eq!(admin.posts(None).len(), 1);
    }

    #[test]
    fn test_inquiry_toggle_and_count() {
        let mut store = SiteStore::seeded().unwrap();
        let mut admin = AdminPanel::new(&mut store);
        let pending = admin.pending_inquiry_count();
        let id = admin.inquiries()[0].id;

        let status = admin.toggle_inquiry_status(id).unwrap();
        let expected = if status == InquiryStatus::Done {
            pending - 1
        } else {
            pending + 1
        };
        assert_eq!(admin.pending_inquiry_count(), expected);

        admin.toggle_inquiry_status(id).unwrap();
        assert_eq!(admin.pending_inquiry_count(), pending);
    }

    #[test]
    fn test_popup_lifecycle() {
        let mut store = SiteStore::new();
        let mut admin = AdminPanel::new(&mut store);

        let draft = PopupDraft {
            title: "설명회".to_string(),
            image: None,
            body: None,
            link: None,
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
            visible: true,
        };
        let id = admin.create_popup(draft.clone()).unwrap();
        assert!(!admin.toggle_popup_visibility(id).unwrap());
        assert!(admin.toggle_popup_visibility(id).unwrap());

        admin
            .update_popup(
                id,
                PopupPatch {
                    end: Some(date(2024, 2, 29)),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(admin.popups()[0].end, date(2024, 2, 29));

        let blank = PopupDraft {
            title: " ".to_string(),
            ..draft
        };
        assert!(admin.create_popup(blank).unwrap_err().is_validation());

        admin.delete_popup(id).unwrap();
        assert!(admin.popups().is_empty());
    }
}
