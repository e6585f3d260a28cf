use contracts::dashboards::d400_verification_board::board::bucket_title;
use contracts::domain::a001_asset::AssetStatus;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn status_color(status: AssetStatus) -> BadgeColor {
    match status {
        AssetStatus::Active => BadgeColor::Success,
        AssetStatus::Verification => BadgeColor::Warning,
        AssetStatus::CatalogFilling => BadgeColor::Informative,
        AssetStatus::Registered => BadgeColor::Brand,
        AssetStatus::Maintenance => BadgeColor::Danger,
        AssetStatus::Inactive => BadgeColor::Subtle,
    }
}

#[component]
pub fn AssetStatusBadge(status: AssetStatus) -> impl IntoView {
    view! {
        <Badge appearance=BadgeAppearance::Tint color=status_color(status)>
            {bucket_title(status)}
        </Badge>
    }
}
