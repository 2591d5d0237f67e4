//! The two fixed analysis prompt templates.
//!
//! Each template embeds the document text verbatim and ends with an explicit
//! "return exactly one JSON object with this shape" directive naming the
//! camelCase keys the extractor expects. Embedded quote characters are not
//! escaped; text that itself resembles JSON can confuse the model's reply
//! format, which the depth-aware extractor downstream tolerates but cannot
//! fully repair.

/// Which of the two fixed analyses a prompt requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisKind {
    /// Spelling, tone, register mixing, punctuation, and euphony.
    Linguistic,
    /// Genre detection, missing elements, and improvement advice.
    Content,
}

/// Render the instruction template for `kind` with `text` interpolated.
pub fn build_prompt(kind: AnalysisKind, text: &str) -> String {
    match kind {
        AnalysisKind::Linguistic => linguistic_prompt(text),
        AnalysisKind::Content => content_prompt(text),
    }
}

fn linguistic_prompt(text: &str) -> String {
    format!(
        r#"আপনি একজন বাংলা ভাষা বিশেষজ্ঞ এবং সাহিত্যিক। নিচের বাংলা টেক্সট সম্পূর্ণভাবে বিশ্লেষণ করুন।

টেক্সট: "{text}"

নির্দেশনা:

1. **বানান ভুল** চিহ্নিত করুন

2. **Tone/ভাব** চিহ্নিত করুন এবং সেই অনুযায়ী শব্দ পরিবর্তনের পরামর্শ দিন

3. **সাধু-চলিত ভাষা মিশ্রণ** পরীক্ষা করুন:
   - লেখায় যদি সাধু ও চলিত উভয় রীতির শব্দ মিশ্রিত থাকে
   - কোন একটি রীতিতে লিখলে ভালো হবে তা নির্ধারণ করুন (লেখার ধরন অনুযায়ী)
   - মিশ্রিত শব্দগুলো শনাক্ত করে সঠিক রীতিতে পরিবর্তনের সাজেশন দিন

4. **বিরাম চিহ্ন সমস্যা** খুঁজে বের করুন:
   - যেখানে বিরাম চিহ্ন প্রয়োজন কিন্তু নেই
   - যেখানে ভুল বিরাম চিহ্ন ব্যবহার হয়েছে

5. **শ্রুতিমধুরতা (Euphony)** উন্নতি:
   - একই শব্দের পুনরাবৃত্তি এড়াতে সমার্থক শব্দ
   - শব্দ চয়ন যা বাক্যকে আরো সুন্দর করবে

Response format (শুধুমাত্র valid JSON object return করুন):
{{
  "spellingErrors": [
    {{
      "wrong": "ভুল শব্দ",
      "suggestions": ["সঠিক বানান ১", "সঠিক বানান ২"],
      "position": index
    }}
  ],
  "toneImprovements": [
    {{
      "current": "বর্তমান শব্দ",
      "suggestions": ["ভাব অনুযায়ী শব্দ ১"],
      "reason": "কেন পরিবর্তন করা উচিত"
    }}
  ],
  "languageStyleMixing": {{
    "detected": true/false,
    "recommendedStyle": "সাধু রীতি" অথবা "চলিত রীতি",
    "reason": "কেন এই রীতি প্রস্তাবিত",
    "corrections": [
      {{
        "current": "বর্তমান শব্দ",
        "suggestion": "প্রস্তাবিত রীতি অনুযায়ী",
        "type": "সাধু→চলিত"
      }}
    ]
  }},
  "punctuationIssues": [
    {{
      "issue": "সমস্যার বর্ণনা",
      "currentSentence": "বর্তমান বাক্য",
      "correctedSentence": "সংশোধিত বাক্য",
      "explanation": "কেন এই পরিবর্তন প্রয়োজন"
    }}
  ],
  "euphonyImprovements": [
    {{
      "current": "বর্তমান শব্দ",
      "suggestions": ["মধুর বিকল্প ১"],
      "reason": "কেন এই পরিবর্তন লেখাকে আরো সুন্দর করবে"
    }}
  ]
}}

যদি কোন ভুল/পরামর্শ না থাকে, তাহলে খালি array বা false দিন।"#
    )
}

fn content_prompt(text: &str) -> String {
    format!(
        r#"আপনি একজন বাংলা সাহিত্য ও লেখনী বিশেষজ্ঞ। নিচের বাংলা লেখাটি বিশ্লেষণ করুন এবং তথ্য দিন।

টেক্সট: "{text}"

নির্দেশনা:
1. এই লেখাটি কি ধরনের (যেমন: চিঠি, আবেদন, প্রবন্ধ, গল্প, কবিতা ইত্যাদি)
2. এই ধরনের লেখায় সাধারণত কি কি উপাদান থাকা উচিত যা এই লেখায় নেই
3. লেখাটি আরও ভালো করতে কি কি পরামর্শ দেওয়া যায়

Response format (শুধুমাত্র valid JSON object return করুন):
{{
  "contentType": "লেখার ধরন",
  "description": "এই ধরনের লেখার সংক্ষিপ্ত বর্ণনা",
  "missingElements": ["অনুপস্থিত উপাদান ১"],
  "suggestions": ["উন্নতির পরামর্শ ১"]
}}"#
    )
}
