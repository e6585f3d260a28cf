use crate::domain::a001_asset::context::AssetStoreProvider;
use crate::domain::a002_technical_parameter::context::MasterDataProvider;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;

/// Корень приложения.
///
/// Порядок провайдеров важен: реестр параметров и хранилище активов
/// читают токен из `AuthProvider`.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppGlobalContext::new());

    view! {
        <AuthProvider>
            <MasterDataProvider>
                <AssetStoreProvider>
                    <AppRoutes />
                </AssetStoreProvider>
            </MasterDataProvider>
        </AuthProvider>
    }
}
