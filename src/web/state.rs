use dsatmath::services::LogoService;

#[derive(Clone)]
pub struct AppState {
    pub logo: LogoService,
}
