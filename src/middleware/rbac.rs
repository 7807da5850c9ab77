// src/middleware/rbac.rs

use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use std::marker::PhantomData;

use crate::{
    common::error::ApiError,
    config::AppState,
    db::SessionHandle,
    middleware::{auth::CurrentUser, i18n::Locale},
    models::{auth::User, rbac::PageId},
    services::access_policy,
};

/// 1. O Trait que define quais páginas liberam uma ação
pub trait PageDef: Send + Sync + 'static {
    const PAGES: &'static [PageId];
}

/// 2. O Extractor (Guardião): usuário logado cujo menu tem ao menos uma das páginas
pub struct RequirePage<P> {
    pub session: SessionHandle,
    pub user: User,
    _page: PhantomData<P>,
}

impl<P, S> FromRequestParts<S> for RequirePage<P>
where
    P: PageDef,
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let locale = Locale::from_request_parts(parts, state).await.unwrap_or_default();

        // A. Sessão e usuário
        let CurrentUser { session, user } = CurrentUser::from_request_parts(parts, state)
            .await
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

        // B. Política de acesso
        access_policy::require_any(user.role, P::PAGES)
            .map_err(|e| e.to_api_error(&locale, &app_state.i18n_store))?;

        Ok(RequirePage { session, user, _page: PhantomData })
    }
}

// ---
// DEFINIÇÃO DAS PÁGINAS (TIPOS)
// ---

macro_rules! page_guard {
    ($name:ident => [$($page:ident),+]) => {
        pub struct $name;
        impl PageDef for $name {
            const PAGES: &'static [PageId] = &[$(PageId::$page),+];
        }
    };
}

page_guard!(ClientsPage => [Clients]);
page_guard!(PeoplePage => [People]);
page_guard!(PartnersPage => [PartnersManagement]);
page_guard!(NewsPage => [InternalNews]);
page_guard!(FinancePage => [Finance]);
page_guard!(DocumentsPage => [Documents]);
page_guard!(ProcessesPage => [Processes]);
page_guard!(AgendaPage => [Meetings, ClientAgenda, PartnerAgenda]);
page_guard!(ClientFinancePage => [ClientFinance]);
page_guard!(ClientAccountingPage => [ClientAccounting]);
page_guard!(HearingsManagePage => [HearingsManage]);
page_guard!(HearingPanelPage => [HearingPanel]);
page_guard!(ChatPage => [Chat]);
