use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse, axum_helpers::server::HealthResponse)
    ),
    info(
        title = "Product Service",
        version = "0.1.0",
        description = "Inventory management API for products, stock levels and suppliers"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_products::URL, api = domain_products::ApiDoc),
        (path = domain_stocks::URL, api = domain_stocks::ApiDoc),
        (path = domain_suppliers::URL, api = domain_suppliers::ApiDoc)
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/product-service/products/add",
            "/product-service/products/search",
            "/product-service/products/get-by-id/{id}",
            "/product-service/stocks/update/{id}",
            "/product-service/stocks/get-all",
            "/product-service/suppliers/delete/{id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected} in {paths:?}");
        }
    }
}
