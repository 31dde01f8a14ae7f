use crate::usecases::u508_compare_rows::view::CompareRowsPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CompareRowsPage />
    }
}
