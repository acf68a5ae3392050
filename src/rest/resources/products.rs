//! Products API: products, variants, images and store pages.
//!
//! Products live on store pages. Each product has one or more variants that
//! carry pricing, stock and shipping measurements, and a list of images that
//! can be reordered and assigned to variants.
//!
//! # Example
//!
//! ```rust,ignore
//! use squarespace_commerce::rest::resources::common::Amount;
//! use squarespace_commerce::rest::resources::products::{
//!     self, CreateProductRequest, CreateProductVariantRequest, Pricing,
//! };
//!
//! let request = CreateProductRequest {
//!     product_type: "PHYSICAL".to_string(),
//!     store_page_id: "5f3c...".to_string(),
//!     name: Some("Linen Shirt".to_string()),
//!     is_visible: true,
//!     variants: vec![CreateProductVariantRequest {
//!         sku: "SHIRT-M".to_string(),
//!         pricing: Pricing::new(Amount::new("USD", "49.00")),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let product = products::create_product(&config, &request).await?;
//! let image = products::upload_product_image(&config, &product.id, "shirt.jpg").await?;
//! ```

use std::collections::HashMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clients::HttpMethod;
use crate::config::CommerceConfig;
use crate::rest::endpoint::{check_id_list, require_id, Endpoint};
use crate::rest::errors::CommerceError;
use crate::rest::params::QueryParams;
use crate::rest::resources::common::{Amount, Nullable, Pagination};

const PRODUCT_ID_REQUIRED: &str = "productID is required";
const VARIANT_ID_REQUIRED: &str = "variantID is required";
const IMAGE_ID_REQUIRED: &str = "imageID is required";

// ============================================================================
// Records
// ============================================================================

/// A product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// The unique identifier of the product.
    pub id: String,
    /// `PHYSICAL`, `DIGITAL`, `SERVICE` or `GIFT_CARD`.
    #[serde(rename = "type")]
    pub product_type: String,
    /// The store page listing the product.
    pub store_page_id: String,
    /// Display name.
    pub name: String,
    /// HTML description.
    pub description: String,
    /// Absolute URL of the product page.
    pub url: String,
    /// Path segment of the product page.
    pub url_slug: String,
    /// Merchant tags.
    pub tags: Vec<String>,
    /// Whether shoppers can see the product.
    pub is_visible: bool,
    /// Search engine title and description overrides.
    pub seo_options: Option<SeoOptions>,
    /// Names of the attributes that distinguish variants, e.g. `Size`.
    pub variant_attributes: Vec<String>,
    /// Purchasable variants.
    pub variants: Vec<ProductVariant>,
    /// Images in display order.
    pub images: Vec<ProductImage>,
    /// Set on products without variants, e.g. gift cards.
    pub pricing: Option<Pricing>,
    /// The downloadable file of a digital product.
    pub digital_good: Option<DigitalGood>,
    /// Creation time.
    pub created_on: Option<DateTime<Utc>>,
    /// Time of the last change.
    pub modified_on: Option<DateTime<Utc>>,
}

/// A purchasable variant of a product.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductVariant {
    /// The unique identifier of the variant.
    pub id: String,
    /// Stock keeping unit.
    pub sku: String,
    /// Price and sale state.
    pub pricing: Pricing,
    /// Stock level. Absent for digital products.
    pub stock: Option<Stock>,
    /// Values keyed by the product's variant attributes, e.g. `{"Size": "M"}`.
    pub attributes: HashMap<String, String>,
    /// Weight and size used for shipping rates.
    pub shipping_measurements: Option<ShippingMeasurements>,
    /// Image shown when the variant is selected.
    pub image: Option<ProductImage>,
}

/// Search engine metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeoOptions {
    /// Page title override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Meta description override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Variant pricing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pricing {
    /// Regular price.
    pub base_price: Amount,
    /// Whether `sale_price` applies.
    pub on_sale: bool,
    /// Discounted price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Amount>,
}

impl Pricing {
    /// Pricing at `base_price`, not on sale.
    #[must_use]
    pub fn new(base_price: Amount) -> Self {
        Self {
            base_price,
            on_sale: false,
            sale_price: None,
        }
    }
}

/// Stock level of a variant.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Stock {
    /// Units in stock.
    pub quantity: i64,
    /// Whether stock is untracked.
    pub unlimited: bool,
}

/// Shipping weight and dimensions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShippingMeasurements {
    /// Package weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
    /// Package size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
}

/// Weight, in `POUND` or `KILOGRAM`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Weight {
    /// `POUND` or `KILOGRAM`.
    pub unit: String,
    /// Weight in `unit`.
    pub value: f64,
}

/// Dimensions, in `INCH` or `CENTIMETER`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dimensions {
    /// `INCH` or `CENTIMETER`.
    pub unit: String,
    /// Length in `unit`.
    pub length: f64,
    /// Width in `unit`.
    pub width: f64,
    /// Height in `unit`.
    pub height: f64,
}

/// A product image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductImage {
    /// The unique identifier of the image.
    pub id: String,
    /// Alternative text.
    pub alt_text: Option<String>,
    /// CDN URL of the original.
    pub url: String,
    /// Pixel size of the original.
    pub original_size: Option<ImageSize>,
    /// Resized variants the CDN serves.
    pub available_formats: Vec<String>,
}

/// Pixel size of an image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A downloadable file attached to a digital product.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DigitalGood {
    /// The unique identifier of the file.
    pub id: String,
    /// Name shown to the buyer.
    pub filename: String,
}

/// A store page that products are listed on.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorePage {
    /// The unique identifier of the store page.
    pub id: String,
    /// Page title.
    pub title: String,
    /// Whether the page is published.
    pub is_enabled: bool,
}

/// Processing state of an uploaded image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageUploadStatus {
    /// The image is still being processed.
    Processing,
    /// The image is ready to use.
    Ready,
    /// Processing failed.
    Error,
    /// A status this version of the crate does not know.
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Requests and responses
// ============================================================================

/// Body of [`create_product`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// `PHYSICAL`, `DIGITAL`, `SERVICE` or `GIFT_CARD`.
    #[serde(rename = "type")]
    pub product_type: String,
    /// The store page to list the product on.
    pub store_page_id: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Path segment of the product page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_slug: Option<String>,
    /// Merchant tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Whether shoppers can see the product.
    pub is_visible: bool,
    /// Search engine overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_options: Option<SeoOptions>,
    /// Names of the attributes that distinguish variants.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variant_attributes: Vec<String>,
    /// Initial variants.
    pub variants: Vec<CreateProductVariantRequest>,
}

/// Body of [`create_product_variant`], also used inline by [`CreateProductRequest`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductVariantRequest {
    /// Stock keeping unit.
    pub sku: String,
    /// Price and sale state.
    pub pricing: Pricing,
    /// Initial stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<Stock>,
    /// Value for each of the product's variant attributes.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Weight and size used for shipping rates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_measurements: Option<ShippingMeasurements>,
}

/// Body of [`update_product`]. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New HTML description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New path segment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_slug: Option<String>,
    /// Replacement tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// New visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// Replacement attribute names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_attributes: Option<Vec<String>>,
    /// Replacement search engine overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo_options: Option<SeoOptions>,
}

/// Body of [`update_product_variant`]. Unset fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductVariantRequest {
    /// New SKU.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Replacement pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Pricing>,
    /// Replacement attribute values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    /// Replacement shipping measurements.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_measurements: Option<ShippingMeasurements>,
}

/// Body of [`update_product_image`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductImageRequest {
    /// New alternative text.
    pub alt_text: String,
}

/// Body of [`assign_product_image_to_variant`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignProductImageToVariantRequest {
    /// Image to show for the variant, from the same product.
    pub image_id: String,
}

/// Body of [`reorder_product_image`].
///
/// `afterImageId` is sent as `null` to move the image to the front, and
/// omitted entirely to leave its position unchanged.
///
/// # Example
///
/// ```rust
/// use squarespace_commerce::rest::resources::products::ReorderProductImageRequest;
///
/// let front = ReorderProductImageRequest::move_to_front();
/// assert_eq!(serde_json::to_string(&front).unwrap(), r#"{"afterImageId":null}"#);
///
/// let after = ReorderProductImageRequest::after("img-2");
/// assert_eq!(serde_json::to_string(&after).unwrap(), r#"{"afterImageId":"img-2"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderProductImageRequest {
    /// `Value(id)` places the image after `id`; `Null` moves it to the front.
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub after_image_id: Nullable<String>,
}

impl ReorderProductImageRequest {
    /// Moves the image to the first position.
    #[must_use]
    pub const fn move_to_front() -> Self {
        Self {
            after_image_id: Nullable::Null,
        }
    }

    /// Moves the image directly after `image_id`.
    #[must_use]
    pub fn after(image_id: impl Into<String>) -> Self {
        Self {
            after_image_id: Nullable::Value(image_id.into()),
        }
    }
}

/// Response of [`retrieve_all_store_pages`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveAllStorePagesResponse {
    /// Store pages on this page.
    pub store_pages: Vec<StorePage>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

/// Response of [`retrieve_all_products`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveAllProductsResponse {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Cursor for the next page.
    pub pagination: Pagination,
}

/// Response of [`retrieve_specific_products`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveSpecificProductsResponse {
    /// The requested products.
    pub products: Vec<Product>,
}

/// Response of [`upload_product_image`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadProductImageResponse {
    /// ID of the new image. Poll its status until processing ends.
    pub image_id: String,
}

/// Response of [`get_product_image_upload_status`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageUploadStatusResponse {
    /// Processing state of the upload.
    pub status: ImageUploadStatus,
}

// ============================================================================
// Endpoints
// ============================================================================

const CREATE_PRODUCT: Endpoint = Endpoint::new(
    "CreateProduct",
    "create product",
    HttpMethod::Post,
    "commerce/products",
    201,
);
const CREATE_PRODUCT_VARIANT: Endpoint = Endpoint::new(
    "CreateProductVariant",
    "create product variant",
    HttpMethod::Post,
    "commerce/products/{productId}/variants",
    201,
);
const UPLOAD_PRODUCT_IMAGE: Endpoint = Endpoint::new(
    "UploadProductImage",
    "upload product image",
    HttpMethod::Post,
    "commerce/products/{productId}/images",
    202,
);
const RETRIEVE_ALL_STORE_PAGES: Endpoint = Endpoint::new(
    "RetrieveAllStorePages",
    "retrieve store pages",
    HttpMethod::Get,
    "commerce/store_pages",
    200,
);
const RETRIEVE_ALL_PRODUCTS: Endpoint = Endpoint::new(
    "RetrieveAllProducts",
    "retrieve all products",
    HttpMethod::Get,
    "commerce/products",
    200,
);
const RETRIEVE_SPECIFIC_PRODUCTS: Endpoint = Endpoint::new(
    "RetrieveSpecificProducts",
    "retrieve specific products",
    HttpMethod::Get,
    "commerce/products/{productIds}",
    200,
);
const GET_PRODUCT_IMAGE_UPLOAD_STATUS: Endpoint = Endpoint::new(
    "GetProductImageUploadStatus",
    "get product image upload status",
    HttpMethod::Get,
    "commerce/products/{productId}/images/{imageId}/status",
    200,
);
const ASSIGN_PRODUCT_IMAGE_TO_VARIANT: Endpoint = Endpoint::new(
    "AssignProductImageToVariant",
    "assign product image to variant",
    HttpMethod::Post,
    "commerce/products/{productId}/variants/{variantId}/image",
    204,
);
const REORDER_PRODUCT_IMAGE: Endpoint = Endpoint::new(
    "ReorderProductImage",
    "reorder product image",
    HttpMethod::Post,
    "commerce/products/{productId}/images/{imageId}/order",
    204,
);
const UPDATE_PRODUCT: Endpoint = Endpoint::new(
    "UpdateProduct",
    "update product",
    HttpMethod::Post,
    "commerce/products/{productId}",
    200,
);
const UPDATE_PRODUCT_VARIANT: Endpoint = Endpoint::new(
    "UpdateProductVariant",
    "update product variant",
    HttpMethod::Post,
    "commerce/products/{productId}/variants/{variantId}",
    200,
);
const UPDATE_PRODUCT_IMAGE: Endpoint = Endpoint::new(
    "UpdateProductImage",
    "update product image",
    HttpMethod::Post,
    "commerce/products/{productId}/images/{imageId}",
    200,
);
const DELETE_PRODUCT: Endpoint = Endpoint::new(
    "DeleteProduct",
    "delete product",
    HttpMethod::Delete,
    "commerce/products/{productId}",
    204,
);
const DELETE_PRODUCT_VARIANT: Endpoint = Endpoint::new(
    "DeleteProductVariant",
    "delete product variant",
    HttpMethod::Delete,
    "commerce/products/{productId}/variants/{variantId}",
    204,
);
const DELETE_PRODUCT_IMAGE: Endpoint = Endpoint::new(
    "DeleteProductImage",
    "delete product image",
    HttpMethod::Delete,
    "commerce/products/{productId}/images/{imageId}",
    204,
);

// ============================================================================
// Operations
// ============================================================================

/// Creates a product.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `201 Created`.
pub async fn create_product(
    config: &CommerceConfig,
    request: &CreateProductRequest,
) -> Result<Product, CommerceError> {
    CREATE_PRODUCT.call(config).json(request)?.fetch().await
}

/// Adds a variant to a product.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `product_id` is empty, and
/// [`CommerceError`] unless the API answers `201 Created`.
pub async fn create_product_variant(
    config: &CommerceConfig,
    product_id: &str,
    request: &CreateProductVariantRequest,
) -> Result<ProductVariant, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    CREATE_PRODUCT_VARIANT
        .call(config)
        .path_param("productId", product_id)
        .json(request)?
        .fetch()
        .await
}

/// Uploads an image file to a product.
///
/// The file is streamed as the multipart field `file`; its content type is
/// guessed from the extension. Processing is asynchronous on the remote side,
/// poll [`get_product_image_upload_status`] with the returned ID.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `product_id` is empty,
/// [`CommerceError::Http`] if the file cannot be opened, and
/// [`CommerceError`] unless the API answers `202 Accepted`.
pub async fn upload_product_image(
    config: &CommerceConfig,
    product_id: &str,
    file_path: impl AsRef<Path>,
) -> Result<UploadProductImageResponse, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    UPLOAD_PRODUCT_IMAGE
        .call(config)
        .path_param("productId", product_id)
        .file("file", file_path.as_ref())
        .fetch()
        .await
}

/// Lists store pages.
///
/// # Errors
///
/// Returns [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_store_pages(
    config: &CommerceConfig,
    cursor: Option<&str>,
) -> Result<RetrieveAllStorePagesResponse, CommerceError> {
    RETRIEVE_ALL_STORE_PAGES
        .call(config)
        .query_param("cursor", cursor.filter(|c| !c.is_empty()))
        .fetch()
        .await
}

/// Lists products.
///
/// Forwards `cursor`, `modifiedAfter`, `modifiedBefore` and `type`. Without a
/// cursor a type filter is required. `status`, `filter`, `sort_direction` and
/// `sort_field` are validated but not sent.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidQuery`] if `params` fails validation,
/// [`CommerceError::InvalidInput`] if neither a cursor nor a type is given,
/// and [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_all_products(
    config: &CommerceConfig,
    params: &QueryParams,
) -> Result<RetrieveAllProductsResponse, CommerceError> {
    params.validate()?;
    if params.cursor().is_none() && params.product_type().is_none() {
        return Err(CommerceError::invalid_input(
            "type is required when cursor is not specified",
        ));
    }

    RETRIEVE_ALL_PRODUCTS
        .call(config)
        .query_param("cursor", params.cursor())
        .query_param("modifiedAfter", params.modified_after())
        .query_param("modifiedBefore", params.modified_before())
        .query_param("type", params.product_type())
        .fetch()
        .await
}

/// Retrieves up to 50 products by ID.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `product_ids` is empty or has
/// more than 50 entries, and [`CommerceError`] unless the API answers `200 OK`.
pub async fn retrieve_specific_products<S: AsRef<str>>(
    config: &CommerceConfig,
    product_ids: &[S],
) -> Result<RetrieveSpecificProductsResponse, CommerceError> {
    check_id_list(
        product_ids,
        "at least one product ID is required",
        "cannot retrieve more than 50 products at once",
    )?;
    RETRIEVE_SPECIFIC_PRODUCTS
        .call(config)
        .path_list("productIds", product_ids)
        .fetch()
        .await
}

/// Returns the processing state of an uploaded image.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn get_product_image_upload_status(
    config: &CommerceConfig,
    product_id: &str,
    image_id: &str,
) -> Result<ImageUploadStatusResponse, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(image_id, IMAGE_ID_REQUIRED)?;
    GET_PRODUCT_IMAGE_UPLOAD_STATUS
        .call(config)
        .path_param("productId", product_id)
        .path_param("imageId", image_id)
        .fetch()
        .await
}

/// Sets the image shown for a variant.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn assign_product_image_to_variant(
    config: &CommerceConfig,
    product_id: &str,
    variant_id: &str,
    request: &AssignProductImageToVariantRequest,
) -> Result<u16, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(variant_id, VARIANT_ID_REQUIRED)?;
    ASSIGN_PRODUCT_IMAGE_TO_VARIANT
        .call(config)
        .path_param("productId", product_id)
        .path_param("variantId", variant_id)
        .json(request)?
        .status()
        .await
}

/// Moves an image within the product's image list.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn reorder_product_image(
    config: &CommerceConfig,
    product_id: &str,
    image_id: &str,
    request: &ReorderProductImageRequest,
) -> Result<u16, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(image_id, IMAGE_ID_REQUIRED)?;
    REORDER_PRODUCT_IMAGE
        .call(config)
        .path_param("productId", product_id)
        .path_param("imageId", image_id)
        .json(request)?
        .status()
        .await
}

/// Updates a product.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `product_id` is empty, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn update_product(
    config: &CommerceConfig,
    product_id: &str,
    request: &UpdateProductRequest,
) -> Result<Product, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    UPDATE_PRODUCT
        .call(config)
        .path_param("productId", product_id)
        .json(request)?
        .fetch()
        .await
}

/// Updates a variant.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn update_product_variant(
    config: &CommerceConfig,
    product_id: &str,
    variant_id: &str,
    request: &UpdateProductVariantRequest,
) -> Result<ProductVariant, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(variant_id, VARIANT_ID_REQUIRED)?;
    UPDATE_PRODUCT_VARIANT
        .call(config)
        .path_param("productId", product_id)
        .path_param("variantId", variant_id)
        .json(request)?
        .fetch()
        .await
}

/// Updates an image's alt text.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `200 OK`.
pub async fn update_product_image(
    config: &CommerceConfig,
    product_id: &str,
    image_id: &str,
    request: &UpdateProductImageRequest,
) -> Result<ProductImage, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(image_id, IMAGE_ID_REQUIRED)?;
    UPDATE_PRODUCT_IMAGE
        .call(config)
        .path_param("productId", product_id)
        .path_param("imageId", image_id)
        .json(request)?
        .fetch()
        .await
}

/// Deletes a product.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if `product_id` is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn delete_product(
    config: &CommerceConfig,
    product_id: &str,
) -> Result<u16, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    DELETE_PRODUCT
        .call(config)
        .path_param("productId", product_id)
        .status()
        .await
}

/// Deletes a variant.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn delete_product_variant(
    config: &CommerceConfig,
    product_id: &str,
    variant_id: &str,
) -> Result<u16, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(variant_id, VARIANT_ID_REQUIRED)?;
    DELETE_PRODUCT_VARIANT
        .call(config)
        .path_param("productId", product_id)
        .path_param("variantId", variant_id)
        .status()
        .await
}

/// Deletes an image.
///
/// # Errors
///
/// Returns [`CommerceError::InvalidInput`] if an ID is empty, and
/// [`CommerceError`] unless the API answers `204 No Content`.
pub async fn delete_product_image(
    config: &CommerceConfig,
    product_id: &str,
    image_id: &str,
) -> Result<u16, CommerceError> {
    require_id(product_id, PRODUCT_ID_REQUIRED)?;
    require_id(image_id, IMAGE_ID_REQUIRED)?;
    DELETE_PRODUCT_IMAGE
        .call(config)
        .path_param("productId", product_id)
        .path_param("imageId", image_id)
        .status()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_deserializes_from_api_shape() {
        let product: Product = serde_json::from_value(json!({
            "id": "p1",
            "type": "PHYSICAL",
            "storePageId": "sp1",
            "name": "Linen Shirt",
            "isVisible": true,
            "variantAttributes": ["Size"],
            "variants": [{
                "id": "v1",
                "sku": "SHIRT-M",
                "pricing": {"basePrice": {"currency": "USD", "value": "49.00"}, "onSale": false},
                "stock": {"quantity": 3, "unlimited": false},
                "attributes": {"Size": "M"},
                "shippingMeasurements": {
                    "weight": {"unit": "POUND", "value": 1.5},
                    "dimensions": {"unit": "INCH", "length": 10.0, "width": 8.0, "height": 2.0}
                }
            }],
            "images": [{"id": "i1", "url": "https://img", "originalSize": {"width": 800, "height": 600}, "availableFormats": ["300w"]}],
            "createdOn": "2024-03-01T12:00:00Z",
            "modifiedOn": "2024-03-02T12:00:00.123Z",
            "someFutureField": 1
        }))
        .unwrap();

        assert_eq!(product.product_type, "PHYSICAL");
        assert_eq!(product.variants[0].attributes.get("Size").map(String::as_str), Some("M"));
        assert_eq!(product.variants[0].stock.as_ref().map(|s| s.quantity), Some(3));
        assert_eq!(product.images[0].original_size, Some(ImageSize { width: 800, height: 600 }));
        assert!(product.created_on.is_some());
    }

    #[test]
    fn test_create_request_omits_unset_fields() {
        let request = CreateProductRequest {
            product_type: "PHYSICAL".to_string(),
            store_page_id: "sp1".to_string(),
            is_visible: true,
            variants: vec![CreateProductVariantRequest {
                sku: "SKU-1".to_string(),
                pricing: Pricing::new(Amount::new("USD", "10.00")),
                ..CreateProductVariantRequest::default()
            }],
            ..CreateProductRequest::default()
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "type": "PHYSICAL",
                "storePageId": "sp1",
                "isVisible": true,
                "variants": [{
                    "sku": "SKU-1",
                    "pricing": {"basePrice": {"currency": "USD", "value": "10.00"}, "onSale": false}
                }]
            })
        );
    }

    #[test]
    fn test_update_request_sends_only_changes() {
        let request = UpdateProductRequest {
            is_visible: Some(false),
            ..UpdateProductRequest::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"isVisible": false})
        );
    }

    #[test]
    fn test_reorder_request_states() {
        assert_eq!(
            serde_json::to_value(ReorderProductImageRequest::move_to_front()).unwrap(),
            json!({"afterImageId": null})
        );
        assert_eq!(
            serde_json::to_value(ReorderProductImageRequest::after("i2")).unwrap(),
            json!({"afterImageId": "i2"})
        );
        assert_eq!(
            serde_json::to_value(ReorderProductImageRequest::default()).unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_unknown_upload_status_is_tolerated() {
        let response: ImageUploadStatusResponse =
            serde_json::from_value(json!({"status": "QUEUED"})).unwrap();
        assert_eq!(response.status, ImageUploadStatus::Unknown);

        let response: ImageUploadStatusResponse =
            serde_json::from_value(json!({"status": "READY"})).unwrap();
        assert_eq!(response.status, ImageUploadStatus::Ready);
    }
}
