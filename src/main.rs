//! 통화 감사 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 인증 리졸버를 조립합니다.
//! MongoDB 연결을 설정하고 쿠키 JWT 인증 기반의 REST API를 제공합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use call_audit_backend::config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use call_audit_backend::db::Database;
use call_audit_backend::errors::AppResult;
use call_audit_backend::repositories::MongoUserStore;
use call_audit_backend::routes::configure_all_routes;
use call_audit_backend::services::auth::{AuthResolver, JwtTokenCodec};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 통화 감사 백엔드 시작중...");

    let resolver = build_auth_resolver().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(resolver).await
}

/// 설정을 읽고 저장소, 토큰 코덱, 인증 리졸버를 조립합니다
///
/// # Errors
///
/// * `AppError::ConfigError` - 지원하지 않는 JWT 알고리즘 등 잘못된 설정
/// * `AppError::DatabaseError` - MongoDB 연결 또는 인덱스 생성 실패
async fn build_auth_resolver() -> AppResult<web::Data<AuthResolver>> {
    let jwt_config = JwtConfig::from_env()?;
    info!("🔑 JWT 설정 로드됨: {:?}", jwt_config);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&DatabaseConfig::from_env()).await?;

    let store = MongoUserStore::new(&database);
    store.ensure_indexes().await?;
    info!("✅ {} 인덱스 확인 완료", database.database_name());

    let codec = JwtTokenCodec::new(&jwt_config);

    Ok(web::Data::new(AuthResolver::new(Arc::new(codec), Arc::new(store))))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(resolver: web::Data<AuthResolver>) -> std::io::Result<()> {
    let bind_address = (ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", bind_address.0, bind_address.1);
    info!("📍 Health check: http://{}:{}/health", bind_address.0, bind_address.1);

    let frontend_url = CorsConfig::frontend_url();

    HttpServer::new(move || {
        App::new()
            .app_data(resolver.clone())
            .wrap(configure_cors(&frontend_url))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// # 인증 파이프라인만 debug
/// RUST_LOG=call_audit_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 인증 토큰이 쿠키로 전달되므로 자격 증명을 허용합니다.
fn configure_cors(frontend_url: &str) -> Cors {
    Cors::default()
        .allowed_origin(frontend_url)
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(쿠키 등) 지원
        .supports_credentials()

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
