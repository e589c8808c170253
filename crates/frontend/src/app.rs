use crate::pages::{AuthPage, TasksPage};
use taskdeck_frontend_common::SessionProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Auth,
    #[at("/tasks")]
    Tasks,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Auth => html! { <AuthPage /> },
        Route::Tasks => html! { <TasksPage /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Auth} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}
