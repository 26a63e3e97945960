use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::member::Member;
use crate::domain::search::{MemberTeamRow, Page, PageRequest, SearchCondition, SearchError, Sort};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 1000;

/// Request body for creating a member
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
}

/// Member representation returned by the API
#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub id: Uuid,
    pub username: Option<String>,
    pub age: i32,
    pub team_id: Option<Uuid>,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id(),
            username: member.username().map(str::to_string),
            age: member.age(),
            team_id: member.team_id(),
        }
    }
}

/// Query string for listing members
#[derive(Debug, Default, Deserialize)]
pub struct ListMembersQuery {
    pub username: Option<String>,
}

/// Query string for member searches
///
/// Search fields map onto [`SearchCondition`]; `page`/`size` are only used
/// by the paged endpoint. `sort` is `field[,asc|desc]`, keys separated by `;`.
#[derive(Debug, Default, Deserialize)]
pub struct MemberSearchParams {
    pub username: Option<String>,
    pub team_name: Option<String>,
    pub age_goe: Option<i32>,
    pub age_loe: Option<i32>,
    pub sort: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

impl MemberSearchParams {
    pub fn condition(&self) -> SearchCondition {
        SearchCondition {
            username: self.username.clone(),
            team_name: self.team_name.clone(),
            age_goe: self.age_goe,
            age_loe: self.age_loe,
        }
    }

    pub fn sort(&self) -> Result<Vec<Sort>, SearchError> {
        self.sort
            .as_deref()
            .map(Sort::parse_list)
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    /// Zero-based page and size, with size capped at `MAX_PAGE_SIZE`
    pub fn page_request(&self) -> Result<PageRequest, SearchError> {
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE).min(MAX_PAGE_SIZE);
        Ok(PageRequest::of_page(self.page.unwrap_or(0), size)?.with_sort(self.sort()?))
    }
}

/// Page of search results returned by the API
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
    pub page: i64,
    pub size: i64,
    pub offset: i64,
    pub has_next: bool,
    pub first: bool,
    pub last: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_elements = page.total();
        let total_pages = page.total_pages();
        let number = page.page_number();
        let size = page.request().page_size();
        let offset = page.request().offset();
        let has_next = page.has_next();
        let first = page.is_first();
        let last = page.is_last();

        Self {
            content: page.into_content(),
            total_elements,
            total_pages,
            page: number,
            size,
            offset,
            has_next,
            first,
            last,
        }
    }
}

/// Create a new member
///
/// POST /api/members
pub async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), ApiError> {
    let team = match req.team_id {
        Some(team_id) => Some(
            state
                .teams
                .find_by_id(team_id)
                .await
                .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
                .ok_or_else(|| ApiError::bad_request(format!("Team not found: {}", team_id)))?,
        ),
        None => None,
    };

    let member = Member::new(req.username, req.age, team.as_ref()).map_err(ApiError::bad_request)?;

    state
        .members
        .save(&member)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to save member: {}", e)))?;

    tracing::info!(member_id = %member.id(), "Member created");

    Ok((StatusCode::CREATED, Json(MemberResponse::from(&member))))
}

/// Get a member by ID
///
/// GET /api/members/:id
pub async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberResponse>, ApiError> {
    let member = state
        .members
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Member not found: {}", id)))?;

    Ok(Json(MemberResponse::from(&member)))
}

/// List members, optionally only those with an exact username
///
/// GET /api/members?username=
pub async fn list_members(
    State(state): State<AppState>,
    Query(query): Query<ListMembersQuery>,
) -> Result<Json<Vec<MemberResponse>>, ApiError> {
    let members = match query.username.as_deref() {
        Some(username) => state.members.find_by_username(username).await,
        None => state.members.find_all().await,
    }
    .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(members.iter().map(MemberResponse::from).collect()))
}

/// Search members with optional filters
///
/// GET /api/members/search?username=&team_name=&age_goe=&age_loe=&sort=
pub async fn search_members(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
) -> Result<Json<Vec<MemberTeamRow>>, ApiError> {
    let sort = params.sort()?;
    let rows = state.search.search_sorted(&params.condition(), &sort).await?;

    Ok(Json(rows))
}

/// Search members one page at a time
///
/// GET /api/members/search/page?...&page=&size=&sort=
pub async fn search_members_page(
    State(state): State<AppState>,
    Query(params): Query<MemberSearchParams>,
) -> Result<Json<PageResponse<MemberTeamRow>>, ApiError> {
    let request = params.page_request()?;
    let page = state.search.search_paged(&params.condition(), &request).await?;

    Ok(Json(PageResponse::from(page)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::SortField;

    #[test]
    fn page_request_defaults() {
        let request = MemberSearchParams::default().page_request().unwrap();

        assert_eq!(request.offset(), 0);
        assert_eq!(request.page_size(), DEFAULT_PAGE_SIZE);
        assert!(request.sort().is_empty());
    }

    #[test]
    fn page_request_caps_size() {
        let params = MemberSearchParams {
            size: Some(50_000),
            ..Default::default()
        };

        assert_eq!(params.page_request().unwrap().page_size(), MAX_PAGE_SIZE);
    }

    #[test]
    fn page_request_carries_sort() {
        let params = MemberSearchParams {
            page: Some(2),
            size: Some(5),
            sort: Some("age,desc".to_string()),
            ..Default::default()
        };
        let request = params.page_request().unwrap();

        assert_eq!(request.offset(), 10);
        assert_eq!(request.sort(), &[Sort::desc(SortField::Age)]);
    }

    #[test]
    fn negative_page_is_rejected() {
        let params = MemberSearchParams {
            page: Some(-1),
            ..Default::default()
        };

        assert!(matches!(
            params.page_request(),
            Err(SearchError::InvalidPageRequest { .. })
        ));
    }

    #[test]
    fn page_response_reports_navigation() {
        let request = PageRequest::of_page(1, 2).unwrap();
        let response = PageResponse::from(Page::new(vec!["c", "d"], request, 5));

        assert_eq!(response.total_elements, 5);
        assert_eq!(response.total_pages, 3);
        assert_eq!(response.page, 1);
        assert_eq!(response.offset, 2);
        assert!(response.has_next);
        assert!(!response.first);
        assert!(!response.last);
    }

    #[test]
    fn page_response_with_huge_size_is_single_page() {
        let request = PageRequest::new(0, i64::MAX).unwrap();
        let response = PageResponse::from(Page::new(vec!["a", "b"], request, 2));

        assert_eq!(response.total_pages, 1);
        assert!(response.first);
        assert!(response.last);
    }
}
