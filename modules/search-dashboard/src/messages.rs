// User-facing strings. The dashboard ships a single Turkish locale.

pub const EMPTY_QUERY: &str = "Lütfen bir arama sorgusu girin";
pub const NO_RESULTS: &str = "Arama kriterlerinize uygun içerik bulunamadı.";
pub const SEARCH_FAILED: &str = "Arama sırasında bir hata oluştu";
pub const DETAIL_FAILED: &str = "İçerik detayı yüklenirken bir hata oluştu";
pub const REFRESH_SUCCEEDED: &str = "İçerikler başarıyla yenilendi!";
pub const REFRESH_FAILED: &str = "İçerik yenileme sırasında bir hata oluştu";

pub const PREVIOUS: &str = "Önceki";
pub const NEXT: &str = "Sonraki";

// Detail modal
pub const DESCRIPTION: &str = "Açıklama";
pub const DETAILS: &str = "Detaylar";
pub const TYPE: &str = "Tür:";
pub const PROVIDER: &str = "Provider:";
pub const PUBLISHED: &str = "Yayın Tarihi:";
pub const LANGUAGE: &str = "Dil:";
pub const VIEWS: &str = "Görüntülenme:";
pub const LIKES: &str = "Beğeni:";
pub const DURATION: &str = "Süre:";
pub const READING_TIME: &str = "Okuma Süresi:";
pub const MINUTES: &str = "dakika";
pub const REACTIONS: &str = "Tepki:";

// Score breakdown card
pub const SCORE_DETAILS: &str = "Puan Detayları";
pub const BASE_SCORE: &str = "Temel Puan:";
pub const TYPE_MULTIPLIER: &str = "Tür Çarpanı:";
pub const FRESHNESS_SCORE: &str = "Güncellik Puanı:";
pub const ENGAGEMENT_SCORE: &str = "Etkileşim Puanı:";
pub const FINAL_SCORE: &str = "Final Puan:";
