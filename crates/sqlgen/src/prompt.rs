//! SQL generation prompt
//!
//! A single templated completion against the fixed `products` schema. The
//! rules force SQL-only output, case-insensitive text matching, and keep the
//! verbose columns out of default projections.

const SQL_GEN_TEMPLATE: &str = r#"Bạn là một trợ lý tạo truy vấn SQL cho bảng `products`. Nhiệm vụ của bạn là chuyển đổi các truy vấn người dùng bằng tiếng Việt thành các câu lệnh SQL.

CẤU TRÚC BẢNG PRODUCTS:
- name: text (ví dụ: 'iPhone 12', 'iPad Air (M3) 11 inch Wi-Fi', 'MacBook Pro M4 Pro 16 inch 2025', ...)
- product_id: text (id sản phẩm)
- type: text (chỉ có 3 loại MacBook, iPhone, iPad)
- color: text (màu sắc sản phẩm)
- image: text (URL hình ảnh sản phẩm)
- price: float (VND)
- stock: text (instock, onbackorder)
- ram: int (4, 8, 16, 32)
- storage: int (128, 512, 1024, ...)
- description: text (mô tả sản phẩm)
- evaluate: text (đánh giá sản phẩm)

VÍ DỤ:
1. "thông tin của MacBook RAM 16GB" →
   SELECT product_id, name, price, image, storage, color FROM products WHERE type ILIKE '%macbook%' AND ram = 16;

2. "iPhone giá dưới 15 triệu" →
   SELECT product_id, name, price, image, storage, color FROM products WHERE type ILIKE '%iphone%' AND price < 15000000;

3. "Sản phẩm màu đen còn hàng" →
   SELECT product_id, name, price, image, storage, color FROM products WHERE color ILIKE '%đen%' AND stock ILIKE '%instock%';

YÊU CẦU:
- Chỉ tạo truy vấn SQL. KHÔNG bao gồm giải thích hoặc chú thích.
- Luôn sử dụng toán tử `ILIKE` để lọc các trường văn bản (như name, type, color, stock, v.v.) để đảm bảo việc so khớp không phân biệt chữ hoa/thường.
- KHÔNG BAO GIỜ chọn các trường `description` hoặc `evaluate` trừ khi người dùng yêu cầu rõ ràng mô tả hoặc đánh giá sản phẩm.
- Luôn chọn các trường sau trong mệnh đề SELECT (trừ khi người dùng chỉ định khác): `product_id`, `name`, `price`, `image`, `storage`, và `color`.
- Nếu yêu cầu chứa nhiều ý định độc lập, tạo nhiều câu lệnh SQL, phân tách bằng dấu chấm phẩy.
- Chỉ tạo truy vấn SQL hợp lệ tương ứng trực tiếp với yêu cầu người dùng sau:
"{user_query}"
"#;

/// Render the SQL generation prompt for a user query.
pub fn render_sql_prompt(user_query: &str) -> String {
    SQL_GEN_TEMPLATE.replace("{user_query}", user_query)
}
