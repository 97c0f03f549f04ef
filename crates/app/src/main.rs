//! Fitlink - fitness coaching marketplace
//!
//! Scripted walkthrough of the marketplace flows: browsing coaches,
//! subscribing, messaging, and authoring workout plans. All external
//! services are mocks; all state is in memory.

use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fitlink_core::{
    fixtures, AppConfig, CoachDirectory, MockIdentityProvider, MockPaymentProcessor, Route,
    UserRole,
};

mod state;
mod viewmodel;

use state::AppState;
use viewmodel::{
    BookingForm, ClientProfileForm, CoachProfileForm, ConversationView, DirectoryBrowser,
    LoginForm, PaymentForm, PlanCatalog, PlanEditor, RegisterForm,
};

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Fitlink");

    let config_path = std::env::var_os("FITLINK_CONFIG").map(PathBuf::from);
    let config = AppConfig::load_or_default(config_path.as_deref());

    let state = AppState::new(config);
    let directory = CoachDirectory::seeded();
    let identity = MockIdentityProvider::new(state.config.identity_latency());
    let payments = MockPaymentProcessor::new(state.config.payment_latency());
    let timeout = state.config.request_timeout();
    let mut catalog = PlanCatalog::new();

    // The seeded session: a client with one subscription and a short
    // conversation with the first directory coach.
    let coach_id = fixtures::first_seeded_coach_id();
    let client_id = state
        .current_user_id()
        .await
        .expect("demo boots with a seeded client");

    {
        let store = state.store.lock().await;
        tracing::info!(
            subscriptions = store.subscriptions().len(),
            messages = store.messages().len(),
            unread = store.unread_count(client_id),
            "booted with seeded session"
        );
    }

    // Role gating: the client can browse coaches but not author plans.
    state.navigate(Route::FindCoach).await;
    state.navigate(Route::CreateWorkoutPlan).await;

    // Browse the directory and check out the cheapest yoga coach.
    let mut browser = DirectoryBrowser::new();
    browser.specialty_filter = "yoga".to_string();
    let picked = {
        let store = state.store.lock().await;
        let listing = *browser
            .listings(&directory)
            .first()
            .expect("seeded directory has a yoga coach");
        tracing::info!(coach = %listing.name, price = %listing.price_display(), "picked a coach");
        browser
            .checkout(&directory, &store, listing.id)
            .expect("client checkout")
    };

    // Pay; a successful charge creates the subscription.
    let mut payment = PaymentForm::new();
    payment.set_cardholder("John Doe");
    payment.set_card_number("4242424242424242");
    payment.set_expiry("1230");
    payment.set_cvv("123");
    {
        let mut store = state.store.lock().await;
        match payment
            .submit(&mut store, &payments, &picked, timeout)
            .await
        {
            Some(receipt) => tracing::info!(receipt_id = %receipt.id, "checkout complete"),
            None => tracing::warn!(error = %payment.error, "checkout failed"),
        }
    }

    // Message the original coach.
    {
        let mut store = state.store.lock().await;
        let mut thread = ConversationView::new(coach_id, client_id);
        thread.open(&mut store);
        thread.draft = "Can we move Tuesday's session to the morning?".to_string();
        thread.send(&mut store);
        for line in thread.transcript(&store) {
            tracing::debug!(message = %line, "conversation");
        }
        tracing::info!(
            messages = thread.messages(&store).len(),
            "conversation with coach"
        );
    }

    // Sign out clears everything; gated routes bounce to login again.
    state.store.lock().await.sign_out();
    state.navigate(Route::Dashboard).await;

    // Register a coach account and author a plan.
    let mut register = RegisterForm::new();
    register.email = "sarah@fitlink.example".to_string();
    register.password = "strongpass".to_string();
    register.role = UserRole::Coach;
    {
        let mut store = state.store.lock().await;
        if !register.submit(&mut store, &identity, timeout).await {
            tracing::error!(error = %register.error, "registration failed");
            return;
        }
    }
    state.navigate(Route::CreateWorkoutPlan).await;

    let mut editor = PlanEditor::new();
    editor.title = "Full Body Strength Training".to_string();
    editor.description = "Compound lifts with progressive overload".to_string();
    editor.duration = "45 mins".to_string();
    editor.frequency = "3x/week".to_string();
    editor.add_exercise();
    editor.exercises[0].name = "Barbell Squats".to_string();
    editor.exercises[0].reps = "8-10".to_string();
    editor.exercises[0].rest = "90 sec".to_string();
    {
        let store = state.store.lock().await;
        match editor.save(&store, &mut catalog) {
            Some(plan_id) => {
                catalog.assign(plan_id, client_id);
                let coach_user_id = store.user().map(|u| u.id).unwrap_or_default();
                tracing::info!(
                    plan_id = %plan_id,
                    title = %catalog.get(plan_id).map(|p| p.title.as_str()).unwrap_or(""),
                    coach_plans = catalog.for_coach(coach_user_id).len(),
                    client_plans = catalog.assigned_to(client_id).len(),
                    total = catalog.all().len(),
                    "plan created and assigned"
                );
            }
            None => tracing::warn!(error = %editor.error, "plan rejected"),
        }
    }

    // Fill out the coach profile.
    {
        let mut store = state.store.lock().await;
        let mut profile = CoachProfileForm::from_user(store.user().expect("coach is signed in"));
        profile.specialization = "Weight Loss & Nutrition".to_string();
        profile.experience_years = "5".to_string();
        profile.bio = "Sustainable weight loss through personalized plans".to_string();
        profile.hourly_rate = "49.99".to_string();
        if !profile.save(&mut store) {
            tracing::warn!(error = %profile.error, "coach profile rejected");
        }
    }

    // Back to the client: sign out, sign in again, update the profile.
    state.store.lock().await.sign_out();
    let mut login = LoginForm::new();
    login.email = "client@example.com".to_string();
    login.password = "password".to_string();
    {
        let mut store = state.store.lock().await;
        if !login.submit(&mut store, &identity, timeout).await {
            tracing::error!(error = %login.error, "sign-in failed");
            return;
        }

        let mut profile = ClientProfileForm::from_user(store.user().expect("client is signed in"));
        profile.goals = "lose weight, run 10k".to_string();
        profile.fitness_level = "Intermediate".to_string();
        profile.weight_kg = "82.5".to_string();
        if !profile.save(&mut store) {
            tracing::warn!(error = %profile.error, "client profile rejected");
        }
    }
    tracing::info!(role = ?state.current_role().await, "client session restored");

    // Book an intro session.
    let mut booking = BookingForm::new();
    booking.date = "2026-09-01".to_string();
    booking.time = "09:00".to_string();
    booking.notes = "Intro call before the first workout".to_string();
    if booking.submit().is_none() {
        tracing::warn!(error = %booking.error, "booking rejected");
    }

    tracing::info!(route = %state.current_route(), "walkthrough finished");
}
