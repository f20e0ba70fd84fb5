//! Rule-based chat responder
//!
//! Answers common questions about FieldScore when the remote assistant is
//! unreachable. Messages are lower-cased and tested against an ordered rule
//! table; the first rule with a matching keyword wins. Keywords for every
//! language are checked so a Russian question still matches while the UI is
//! set to English; the language only picks the answer text.

use crate::types::Language;

/// Question topics recognised by the responder, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    Ndvi,
    RiskScore,
    Demo,
    Pricing,
    DataSources,
    Accuracy,
    General,
}

struct Rule {
    topic: Topic,
    keywords: &'static [&'static str],
}

const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Ndvi,
        keywords: &["ndvi", "satellite", "sun'iy yo'ldosh", "спутник"],
    },
    Rule {
        topic: Topic::RiskScore,
        keywords: &[
            "risk score",
            "how does it work",
            "xavf bali",
            "qanday ishlaydi",
            "оценка риска",
            "балл риска",
            "как это работает",
        ],
    },
    Rule {
        topic: Topic::Demo,
        keywords: &["demo", "try", "test", "sinab", "демо", "попробовать", "тест"],
    },
    Rule {
        topic: Topic::Pricing,
        keywords: &["price", "cost", "narx", "цена", "стоимость", "сколько стоит"],
    },
    Rule {
        topic: Topic::DataSources,
        keywords: &["data", "source", "ma'lumot", "manba", "данные", "источник"],
    },
    Rule {
        topic: Topic::Accuracy,
        keywords: &[
            "accuracy",
            "accurate",
            "reliable",
            "aniqlik",
            "ishonchli",
            "точность",
            "надежн",
            "надёжн",
        ],
    },
];

/// Pick the topic for a free-text message
pub fn classify_message(message: &str) -> Topic {
    let message = message.to_lowercase();

    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| message.contains(keyword)))
        .map(|rule| rule.topic)
        .unwrap_or(Topic::General)
}

/// Canned answer for a message
pub fn respond(message: &str, language: Language) -> &'static str {
    answer(classify_message(message), language)
}

/// Canned answer for a topic in the given language
pub fn answer(topic: Topic, language: Language) -> &'static str {
    match language {
        Language::En => answer_en(topic),
        Language::Uz => answer_uz(topic),
        Language::Ru => answer_ru(topic),
    }
}

/// Shown when the assistant itself cannot be reached
pub fn connection_trouble_message(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Sorry, I'm having trouble connecting right now. Please try again in a moment."
        }
        Language::Uz => {
            "Kechirasiz, hozir ulanishda muammo bor. Iltimos, birozdan so'ng qayta urinib ko'ring."
        }
        Language::Ru => {
            "Извините, сейчас возникли проблемы с подключением. Пожалуйста, повторите попытку чуть позже."
        }
    }
}

fn answer_en(topic: Topic) -> &'static str {
    match topic {
        Topic::Ndvi => {
            "NDVI (Normalized Difference Vegetation Index) measures plant health using satellite \
             imagery. Healthy vegetation reflects more near-infrared light. We use Sentinel-2 \
             satellite data at 10m resolution, updated every 5 days, to track farm productivity \
             over 12 months."
        }
        Topic::RiskScore => {
            "Our AI model analyzes 12 features including vegetation health (NDVI), rainfall \
             patterns, soil fertility, and farm characteristics. It outputs a 0-100 risk score: \
             Low Risk (60-100) = approve with favorable terms, Medium (30-59) = standard terms, \
             High (0-29) = reject or require collateral."
        }
        Topic::Demo => {
            "Click the 'Try Our Demo' button in the navigation bar! You can either fill in farm \
             details manually or click 'Fill Sample Data' for a quick test. The system will \
             instantly generate a risk assessment based on vegetation health, weather, and soil \
             data."
        }
        Topic::Pricing => {
            "FieldScore AI costs just $0.10 per farm assessment, compared to $50-200 for \
             traditional manual field visits. This makes credit assessment affordable and \
             scalable for microfinance institutions serving thousands of smallholder farmers."
        }
        Topic::DataSources => {
            "We use three main data sources: 1) Sentinel-2 satellite imagery for NDVI, 2) ERA5 \
             weather data for rainfall and temperature, and 3) SoilGrids for soil properties. All \
             data is automatically retrieved via APIs, no manual collection needed."
        }
        Topic::Accuracy => {
            "Our model targets AUC-ROC > 0.75 and precision > 0.70. The current prototype uses \
             gradient boosting (XGBoost) trained on synthetic data. With real loan performance \
             data from partner institutions, we expect to achieve 20-30% reduction in default \
             rates."
        }
        Topic::General => {
            "I can help you understand FieldScore AI's farm risk scoring system! Ask me about \
             NDVI, satellite data, how the risk scoring works, using the demo, data sources, \
             pricing, or technical details about our model."
        }
    }
}

fn answer_uz(topic: Topic) -> &'static str {
    match topic {
        Topic::Ndvi => {
            "NDVI (Normalizatsiyalangan vegetatsiya indeksi) sun'iy yo'ldosh tasvirlari orqali \
             o'simliklar salomatligini o'lchaydi. Sog'lom o'simliklar ko'proq yaqin infraqizil \
             nurni qaytaradi. Biz 12 oy davomida fermer xo'jaligi mahsuldorligini kuzatish uchun \
             har 5 kunda yangilanadigan 10 m aniqlikdagi Sentinel-2 ma'lumotlaridan foydalanamiz."
        }
        Topic::RiskScore => {
            "Bizning AI modelimiz 12 ta ko'rsatkichni tahlil qiladi: o'simliklar salomatligi \
             (NDVI), yog'ingarchilik, tuproq unumdorligi va xo'jalik xususiyatlari. Natija 0-100 \
             xavf bali: Past xavf (60-100) = qulay shartlarda tasdiqlash, O'rta (30-59) = \
             standart shartlar, Yuqori (0-29) = rad etish yoki garov talab qilish."
        }
        Topic::Demo => {
            "Navigatsiya panelidagi 'Demoni sinab ko'ring' tugmasini bosing! Ma'lumotlarni qo'lda \
             kiritishingiz yoki tezkor sinov uchun 'Namuna ma'lumotlarini to'ldirish' tugmasini \
             bosishingiz mumkin. Tizim darhol xavf bahosini tayyorlaydi."
        }
        Topic::Pricing => {
            "FieldScore AI bir xo'jalikni baholash uchun atigi $0.10 turadi, an'anaviy dalaga \
             chiqib tekshirish esa $50-200 turadi. Bu minglab kichik fermerlarga xizmat \
             ko'rsatuvchi mikromoliya tashkilotlari uchun kredit bahosini arzon va kengaytiriladigan \
             qiladi."
        }
        Topic::DataSources => {
            "Biz uchta asosiy manbadan foydalanamiz: 1) NDVI uchun Sentinel-2 sun'iy yo'ldosh \
             tasvirlari, 2) yog'ingarchilik va harorat uchun ERA5 ob-havo ma'lumotlari, 3) tuproq \
             xususiyatlari uchun SoilGrids. Barcha ma'lumotlar API orqali avtomatik olinadi."
        }
        Topic::Accuracy => {
            "Modelimiz AUC-ROC > 0.75 va aniqlik > 0.70 ga mo'ljallangan. Hozirgi prototip \
             sintetik ma'lumotlarda o'qitilgan gradient boosting (XGBoost) dan foydalanadi. Hamkor \
             tashkilotlarning real kredit ma'lumotlari bilan defoltlarni 20-30% ga kamaytirishni \
             kutamiz."
        }
        Topic::General => {
            "Men sizga FieldScore AI xavf baholash tizimini tushunishda yordam bera olaman! NDVI, \
             sun'iy yo'ldosh ma'lumotlari, xavf bali qanday ishlashi, demo, ma'lumot manbalari, \
             narxlar yoki modelimiz haqida so'rang."
        }
    }
}

fn answer_ru(topic: Topic) -> &'static str {
    match topic {
        Topic::Ndvi => {
            "NDVI (нормализованный вегетационный индекс) измеряет состояние растений по \
             спутниковым снимкам. Здоровая растительность сильнее отражает ближний инфракрасный \
             свет. Мы используем данные Sentinel-2 с разрешением 10 м, обновляемые каждые 5 дней, \
             чтобы отслеживать продуктивность хозяйства за 12 месяцев."
        }
        Topic::RiskScore => {
            "Наша AI-модель анализирует 12 признаков, включая состояние растительности (NDVI), \
             осадки, плодородие почвы и характеристики хозяйства. Результат: балл риска от 0 до \
             100. Низкий риск (60-100) = одобрение на льготных условиях, Средний (30-59) = \
             стандартные условия, Высокий (0-29) = отказ или требование залога."
        }
        Topic::Demo => {
            "Нажмите кнопку 'Попробовать демо' в панели навигации! Можно ввести данные хозяйства \
             вручную или нажать 'Заполнить пример' для быстрой проверки. Система сразу подготовит \
             оценку риска на основе состояния растительности, погоды и почвы."
        }
        Topic::Pricing => {
            "Оценка одного хозяйства в FieldScore AI стоит всего $0.10, тогда как традиционный \
             выезд в поле обходится в $50-200. Это делает кредитную оценку доступной и \
             масштабируемой для микрофинансовых организаций, работающих с тысячами фермеров."
        }
        Topic::DataSources => {
            "Мы используем три основных источника: 1) снимки Sentinel-2 для NDVI, 2) погодные \
             данные ERA5 об осадках и температуре, 3) SoilGrids для свойств почвы. Все данные \
             загружаются автоматически через API, ручной сбор не нужен."
        }
        Topic::Accuracy => {
            "Целевые показатели модели: AUC-ROC > 0.75 и precision > 0.70. Текущий прототип \
             использует градиентный бустинг (XGBoost), обученный на синтетических данных. С \
             реальными данными партнёров мы ожидаем снижения дефолтов на 20-30%."
        }
        Topic::General => {
            "Я помогу разобраться в системе оценки рисков FieldScore AI! Спросите про NDVI, \
             спутниковые данные, как работает балл риска, демо, источники данных, цены или \
             технические детали модели."
        }
    }
}
