//! Static keyword-to-taxonomy tables (PT + EN) and the shared scan routine.
//!
//! Both tables are process-wide constant configuration: ordered slices, read
//! only, never mutated. Keywords map to the catalog's English names. Scan
//! precedence is explicit — the longest keyword found in the text wins, and
//! ties break on table order — so resolution is deterministic even when an
//! utterance contains several matching keywords ("supermercado" beats the
//! embedded "mercado").

/// keyword → category name
pub static CATEGORY_KEYWORDS: &[(&str, &str)] = &[
    // Food & Dining
    ("supermercado", "Food & Dining"),
    ("supermercados", "Food & Dining"),
    ("supermarket", "Food & Dining"),
    ("mercado", "Food & Dining"),
    ("mercados", "Food & Dining"),
    ("grocery", "Food & Dining"),
    ("groceries", "Food & Dining"),
    ("restaurante", "Food & Dining"),
    ("restaurantes", "Food & Dining"),
    ("restaurant", "Food & Dining"),
    ("restaurants", "Food & Dining"),
    ("café", "Food & Dining"),
    ("cafe", "Food & Dining"),
    ("cafés", "Food & Dining"),
    ("cafes", "Food & Dining"),
    ("coffee", "Food & Dining"),
    ("almoço", "Food & Dining"),
    ("almoco", "Food & Dining"),
    ("lunch", "Food & Dining"),
    ("jantar", "Food & Dining"),
    ("jantares", "Food & Dining"),
    ("dinner", "Food & Dining"),
    ("comida", "Food & Dining"),
    ("comidas", "Food & Dining"),
    ("food", "Food & Dining"),
    ("alimentação", "Food & Dining"),
    ("alimentacao", "Food & Dining"),
    ("refeição", "Food & Dining"),
    ("refeicao", "Food & Dining"),
    ("refeições", "Food & Dining"),
    ("refeicoes", "Food & Dining"),
    ("fast food", "Food & Dining"),
    ("delivery", "Food & Dining"),
    ("entrega", "Food & Dining"),
    // Transportation
    ("uber", "Transportation"),
    ("bolt", "Transportation"),
    ("taxi", "Transportation"),
    ("taxis", "Transportation"),
    ("táxi", "Transportation"),
    ("táxis", "Transportation"),
    ("gasolina", "Transportation"),
    ("gas", "Transportation"),
    ("fuel", "Transportation"),
    ("combustível", "Transportation"),
    ("combustivel", "Transportation"),
    ("transporte", "Transportation"),
    ("transportes", "Transportation"),
    ("transport", "Transportation"),
    ("transportation", "Transportation"),
    ("metro", "Transportation"),
    ("bus", "Transportation"),
    ("autocarro", "Transportation"),
    ("autocarros", "Transportation"),
    ("ônibus", "Transportation"),
    ("onibus", "Transportation"),
    ("estacionamento", "Transportation"),
    ("parking", "Transportation"),
    ("carro", "Transportation"),
    ("car", "Transportation"),
    // Salary
    ("salário", "Salary"),
    ("salario", "Salary"),
    ("salary", "Salary"),
    ("ordenado", "Salary"),
    ("vencimento", "Salary"),
    ("bónus", "Salary"),
    ("bonus", "Salary"),
    ("horas extra", "Salary"),
    ("overtime", "Salary"),
    ("comissão", "Salary"),
    ("comissao", "Salary"),
    ("commission", "Salary"),
    // Entertainment
    ("cinema", "Entertainment"),
    ("movie", "Entertainment"),
    ("movies", "Entertainment"),
    ("filme", "Entertainment"),
    ("filmes", "Entertainment"),
    ("netflix", "Entertainment"),
    ("spotify", "Entertainment"),
    ("hbo", "Entertainment"),
    ("disney", "Entertainment"),
    ("streaming", "Entertainment"),
    ("jogos", "Entertainment"),
    ("games", "Entertainment"),
    ("concerto", "Entertainment"),
    ("concertos", "Entertainment"),
    ("concert", "Entertainment"),
    ("entretenimento", "Entertainment"),
    ("diversão", "Entertainment"),
    ("diversao", "Entertainment"),
    ("subscriptions", "Entertainment"),
    ("subscrição", "Entertainment"),
    ("subscricao", "Entertainment"),
    // Shopping
    ("roupa", "Shopping"),
    ("roupas", "Shopping"),
    ("clothes", "Shopping"),
    ("clothing", "Shopping"),
    ("loja", "Shopping"),
    ("lojas", "Shopping"),
    ("store", "Shopping"),
    ("shopping", "Shopping"),
    ("compras", "Shopping"),
    ("eletrónicos", "Shopping"),
    ("eletronicos", "Shopping"),
    ("electronics", "Shopping"),
    ("presente", "Shopping"),
    ("presentes", "Shopping"),
    ("gift", "Shopping"),
    ("gifts", "Shopping"),
    // Bills & Utilities
    ("conta", "Bills & Utilities"),
    ("contas", "Bills & Utilities"),
    ("bill", "Bills & Utilities"),
    ("bills", "Bills & Utilities"),
    ("luz", "Bills & Utilities"),
    ("eletricidade", "Bills & Utilities"),
    ("electricity", "Bills & Utilities"),
    ("água", "Bills & Utilities"),
    ("agua", "Bills & Utilities"),
    ("water", "Bills & Utilities"),
    ("internet", "Bills & Utilities"),
    ("telefone", "Bills & Utilities"),
    ("telemóvel", "Bills & Utilities"),
    ("telemovel", "Bills & Utilities"),
    ("phone", "Bills & Utilities"),
    ("renda", "Bills & Utilities"),
    ("aluguer", "Bills & Utilities"),
    ("rent", "Bills & Utilities"),
    ("hipoteca", "Bills & Utilities"),
    ("mortgage", "Bills & Utilities"),
    // Health
    ("farmácia", "Health"),
    ("farmacia", "Health"),
    ("pharmacy", "Health"),
    ("médico", "Health"),
    ("medico", "Health"),
    ("doctor", "Health"),
    ("hospital", "Health"),
    ("saúde", "Health"),
    ("saude", "Health"),
    ("health", "Health"),
    ("ginásio", "Health"),
    ("ginasio", "Health"),
    ("gym", "Health"),
    ("seguro", "Health"),
    ("insurance", "Health"),
    ("medicamento", "Health"),
    ("medicamentos", "Health"),
    ("medicine", "Health"),
    // Education
    ("educação", "Education"),
    ("educacao", "Education"),
    ("education", "Education"),
    ("curso", "Education"),
    ("cursos", "Education"),
    ("course", "Education"),
    ("courses", "Education"),
    ("livro", "Education"),
    ("livros", "Education"),
    ("book", "Education"),
    ("books", "Education"),
    ("escola", "Education"),
    ("school", "Education"),
    ("universidade", "Education"),
    ("university", "Education"),
    ("propina", "Education"),
    ("propinas", "Education"),
    ("tuition", "Education"),
    // Investments
    ("investimento", "Investments"),
    ("investimentos", "Investments"),
    ("investment", "Investments"),
    ("investments", "Investments"),
    ("dividendos", "Investments"),
    ("dividends", "Investments"),
    ("juros", "Investments"),
    ("interest", "Investments"),
    ("ações", "Investments"),
    ("acoes", "Investments"),
    ("stocks", "Investments"),
    // Freelance
    ("freelance", "Freelance"),
    ("freelancer", "Freelance"),
    ("consultoria", "Freelance"),
    ("consulting", "Freelance"),
    ("projeto", "Freelance"),
    ("projetos", "Freelance"),
    ("project", "Freelance"),
    ("projects", "Freelance"),
    // Other Expenses
    ("outros", "Other Expenses"),
    ("outras", "Other Expenses"),
    ("other", "Other Expenses"),
    ("miscellaneous", "Other Expenses"),
    ("diversos", "Other Expenses"),
    ("taxa", "Other Expenses"),
    ("taxas", "Other Expenses"),
    ("fees", "Other Expenses"),
    ("doação", "Other Expenses"),
    ("doacao", "Other Expenses"),
    ("donation", "Other Expenses"),
    ("donations", "Other Expenses"),
    // Other Income
    ("reembolso", "Other Income"),
    ("reembolsos", "Other Income"),
    ("refund", "Other Income"),
    ("refunds", "Other Income"),
    ("cashback", "Other Income"),
    // Gifts Received
    ("presente recebido", "Gifts Received"),
    ("presentes recebidos", "Gifts Received"),
    ("gift received", "Gifts Received"),
    ("prenda", "Gifts Received"),
    ("prendas", "Gifts Received"),
];

/// keyword → subcategory name
pub static SUBCATEGORY_KEYWORDS: &[(&str, &str)] = &[
    // Food & Dining: Restaurants, Groceries, Fast Food, Coffee, Delivery
    ("supermercado", "Groceries"),
    ("supermercados", "Groceries"),
    ("supermarket", "Groceries"),
    ("mercado", "Groceries"),
    ("mercados", "Groceries"),
    ("grocery", "Groceries"),
    ("groceries", "Groceries"),
    ("mercearia", "Groceries"),
    ("restaurante", "Restaurants"),
    ("restaurantes", "Restaurants"),
    ("restaurant", "Restaurants"),
    ("restaurants", "Restaurants"),
    ("almoço", "Restaurants"),
    ("almoco", "Restaurants"),
    ("jantar", "Restaurants"),
    ("jantares", "Restaurants"),
    ("café", "Coffee"),
    ("cafés", "Coffee"),
    ("cafe", "Coffee"),
    ("cafes", "Coffee"),
    ("coffee", "Coffee"),
    ("fast food", "Fast Food"),
    ("mcdonalds", "Fast Food"),
    ("mcdonald's", "Fast Food"),
    ("burger king", "Fast Food"),
    ("kfc", "Fast Food"),
    ("delivery", "Delivery"),
    ("entrega", "Delivery"),
    ("uber eats", "Delivery"),
    ("glovo", "Delivery"),
    ("bolt food", "Delivery"),
    // Transportation: Fuel, Public Transport, Taxi/Uber, Parking, Car Maintenance
    ("uber", "Taxi/Uber"),
    ("bolt", "Taxi/Uber"),
    ("taxi", "Taxi/Uber"),
    ("taxis", "Taxi/Uber"),
    ("táxi", "Taxi/Uber"),
    ("táxis", "Taxi/Uber"),
    ("gasolina", "Fuel"),
    ("gasóleo", "Fuel"),
    ("gasoleo", "Fuel"),
    ("gas", "Fuel"),
    ("fuel", "Fuel"),
    ("combustível", "Fuel"),
    ("combustivel", "Fuel"),
    ("metro", "Public Transport"),
    ("bus", "Public Transport"),
    ("autocarro", "Public Transport"),
    ("autocarros", "Public Transport"),
    ("ônibus", "Public Transport"),
    ("onibus", "Public Transport"),
    ("comboio", "Public Transport"),
    ("train", "Public Transport"),
    ("transporte público", "Public Transport"),
    ("transporte publico", "Public Transport"),
    ("estacionamento", "Parking"),
    ("parking", "Parking"),
    ("parque", "Parking"),
    ("oficina", "Car Maintenance"),
    ("manutenção", "Car Maintenance"),
    ("manutencao", "Car Maintenance"),
    ("car maintenance", "Car Maintenance"),
    // Salary: Monthly Salary, Bonus, Overtime, Commission
    ("salário", "Monthly Salary"),
    ("salario", "Monthly Salary"),
    ("salary", "Monthly Salary"),
    ("ordenado", "Monthly Salary"),
    ("vencimento", "Monthly Salary"),
    ("bónus", "Bonus"),
    ("bonus", "Bonus"),
    ("horas extra", "Overtime"),
    ("overtime", "Overtime"),
    ("comissão", "Commission"),
    ("comissao", "Commission"),
    ("commission", "Commission"),
    // Entertainment: Movies, Games, Concerts, Sports, Subscriptions
    ("cinema", "Movies"),
    ("movie", "Movies"),
    ("movies", "Movies"),
    ("filme", "Movies"),
    ("filmes", "Movies"),
    ("jogos", "Games"),
    ("jogo", "Games"),
    ("games", "Games"),
    ("game", "Games"),
    ("playstation", "Games"),
    ("xbox", "Games"),
    ("nintendo", "Games"),
    ("concerto", "Concerts"),
    ("concertos", "Concerts"),
    ("concert", "Concerts"),
    ("concerts", "Concerts"),
    ("festival", "Concerts"),
    ("desporto", "Sports"),
    ("sports", "Sports"),
    ("futebol", "Sports"),
    ("football", "Sports"),
    ("netflix", "Subscriptions"),
    ("spotify", "Subscriptions"),
    ("hbo", "Subscriptions"),
    ("disney", "Subscriptions"),
    ("streaming", "Subscriptions"),
    ("subscrição", "Subscriptions"),
    ("subscricao", "Subscriptions"),
    ("subscription", "Subscriptions"),
    // Shopping: Clothing, Electronics, Home & Garden, Personal Care, Gifts
    ("roupa", "Clothing"),
    ("roupas", "Clothing"),
    ("clothes", "Clothing"),
    ("clothing", "Clothing"),
    ("vestuário", "Clothing"),
    ("vestuario", "Clothing"),
    ("eletrónicos", "Electronics"),
    ("eletronicos", "Electronics"),
    ("electronics", "Electronics"),
    ("computador", "Electronics"),
    ("computer", "Electronics"),
    ("tablet", "Electronics"),
    ("portátil", "Electronics"),
    ("portatil", "Electronics"),
    ("laptop", "Electronics"),
    ("casa", "Home & Garden"),
    ("jardim", "Home & Garden"),
    ("home", "Home & Garden"),
    ("garden", "Home & Garden"),
    ("decoração", "Home & Garden"),
    ("decoracao", "Home & Garden"),
    ("higiene", "Personal Care"),
    ("personal care", "Personal Care"),
    ("cuidado pessoal", "Personal Care"),
    ("presente", "Gifts"),
    ("presentes", "Gifts"),
    ("gift", "Gifts"),
    ("gifts", "Gifts"),
    ("prenda", "Gifts"),
    ("prendas", "Gifts"),
    // Bills & Utilities: Electricity, Water, Internet, Phone, Rent/Mortgage
    ("luz", "Electricity"),
    ("eletricidade", "Electricity"),
    ("electricity", "Electricity"),
    ("água", "Water"),
    ("agua", "Water"),
    ("water", "Water"),
    ("internet", "Internet"),
    ("wifi", "Internet"),
    ("telefone", "Phone"),
    ("phone", "Phone"),
    ("telemóvel", "Phone"),
    ("telemovel", "Phone"),
    ("mobile", "Phone"),
    ("renda", "Rent/Mortgage"),
    ("aluguer", "Rent/Mortgage"),
    ("rent", "Rent/Mortgage"),
    ("hipoteca", "Rent/Mortgage"),
    ("mortgage", "Rent/Mortgage"),
    // Health: Medical, Pharmacy, Gym, Insurance
    ("médico", "Medical"),
    ("medico", "Medical"),
    ("doctor", "Medical"),
    ("hospital", "Medical"),
    ("consulta", "Medical"),
    ("medical", "Medical"),
    ("farmácia", "Pharmacy"),
    ("farmacia", "Pharmacy"),
    ("pharmacy", "Pharmacy"),
    ("medicamento", "Pharmacy"),
    ("medicamentos", "Pharmacy"),
    ("medicine", "Pharmacy"),
    ("ginásio", "Gym"),
    ("ginasio", "Gym"),
    ("gym", "Gym"),
    ("fitness", "Gym"),
    ("seguro", "Insurance"),
    ("insurance", "Insurance"),
    ("seguro saúde", "Insurance"),
    ("seguro saude", "Insurance"),
    // Education: Courses, Books, School Supplies, Tuition
    ("curso", "Courses"),
    ("cursos", "Courses"),
    ("course", "Courses"),
    ("courses", "Courses"),
    ("formação", "Courses"),
    ("formacao", "Courses"),
    ("livro", "Books"),
    ("livros", "Books"),
    ("book", "Books"),
    ("books", "Books"),
    ("material escolar", "School Supplies"),
    ("school supplies", "School Supplies"),
    ("propina", "Tuition"),
    ("propinas", "Tuition"),
    ("tuition", "Tuition"),
    // Investments: Dividends, Interest, Capital Gains, Rental Income
    ("dividendos", "Dividends"),
    ("dividends", "Dividends"),
    ("juros", "Interest"),
    ("interest", "Interest"),
    ("mais-valias", "Capital Gains"),
    ("capital gains", "Capital Gains"),
    ("arrendamento", "Rental Income"),
    ("rental income", "Rental Income"),
    // Freelance: Consulting, Projects, Gigs
    ("consultoria", "Consulting"),
    ("consulting", "Consulting"),
    ("projeto", "Projects"),
    ("projetos", "Projects"),
    ("project", "Projects"),
    ("projects", "Projects"),
    ("trabalho", "Gigs"),
    ("gig", "Gigs"),
    ("gigs", "Gigs"),
    // Other Income: Refunds, Cashback, Reimbursements
    ("reembolso", "Refunds"),
    ("reembolsos", "Refunds"),
    ("refund", "Refunds"),
    ("refunds", "Refunds"),
    ("cashback", "Cashback"),
    ("devolução", "Reimbursements"),
    ("devolucao", "Reimbursements"),
    ("reimbursement", "Reimbursements"),
    // Other Expenses: Miscellaneous, Fees, Donations
    ("diversos", "Miscellaneous"),
    ("miscellaneous", "Miscellaneous"),
    ("taxa", "Fees"),
    ("taxas", "Fees"),
    ("fees", "Fees"),
    ("comissão bancária", "Fees"),
    ("doação", "Donations"),
    ("doacao", "Donations"),
    ("donation", "Donations"),
    ("donations", "Donations"),
    ("caridade", "Donations"),
];

/// Scan a keyword table against normalized text.
///
/// Returns the target of the longest keyword contained in the text; ties on
/// length keep the earliest table entry. Length is compared in bytes, which
/// is stable and favors the more specific (longer) phrase.
pub fn scan_keywords(
    text: &str,
    table: &'static [(&'static str, &'static str)],
) -> Option<&'static str> {
    let mut best: Option<(&'static str, &'static str)> = None;
    for &(keyword, target) in table {
        if text.contains(keyword) && best.is_none_or(|(b, _)| keyword.len() > b.len()) {
            best = Some((keyword, target));
        }
    }
    best.map(|(_, target)| target)
}
