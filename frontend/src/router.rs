//! Client-side routing: fixed path set plus a catch-all not-found page.

use crate::data::seo;
use zoon::*;

#[route]
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Route {
    #[route("bookings")]
    Bookings,
    #[route("contact")]
    Contact,
    #[route("demos")]
    Demos,
    #[route("tour")]
    Tour,
    #[route("interviews")]
    Interviews,
    #[route("mixes")]
    Mixes,
    #[route("music")]
    Music,
    #[route("epk")]
    Epk,
    #[route("wave-events")]
    WaveEvents,
    #[route()]
    Root,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageId {
    Home,
    Bookings,
    Contact,
    Demos,
    Tour,
    Interviews,
    Mixes,
    Music,
    Epk,
    WaveEvents,
    NotFound,
}

static PAGE_ID: Lazy<Mutable<PageId>> = Lazy::new(|| Mutable::new(PageId::Home));

static ROUTER: Lazy<Router<Route>> = Lazy::new(|| {
    Router::new(|route: Option<Route>| async move {
        let page_id = match route {
            Some(Route::Root) => PageId::Home,
            Some(Route::Bookings) => PageId::Bookings,
            Some(Route::Contact) => PageId::Contact,
            Some(Route::Demos) => PageId::Demos,
            Some(Route::Tour) => PageId::Tour,
            Some(Route::Interviews) => PageId::Interviews,
            Some(Route::Mixes) => PageId::Mixes,
            Some(Route::Music) => PageId::Music,
            Some(Route::Epk) => PageId::Epk,
            Some(Route::WaveEvents) => PageId::WaveEvents,
            None => PageId::NotFound,
        };
        PAGE_ID.set_neq(page_id);
        seo::apply_page_metadata(page_id);
    })
});

pub fn router() -> &'static Router<Route> {
    &ROUTER
}

pub fn page_id_signal() -> impl Signal<Item = PageId> {
    PAGE_ID.signal()
}
