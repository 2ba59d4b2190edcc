pub mod analyze_receipt_image;
